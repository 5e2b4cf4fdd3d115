// NOTE: userdeck Architecture Rationale
//
// Why one fetch per process?
// - The directory is a snapshot: 12 random people, browsed then discarded
// - A failed fetch leaves an empty grid; there is nothing to reconcile
// - `--input` replays a saved response so every command works offline
//
// Why card numbers instead of grid positions?
// - Card #N is the N-th fetched user in every view of one batch
// - `show 3 --search an` fails loudly when card 3 is filtered out instead of
//   silently opening whoever happens to sit in the third slot
//
// Why is the detail view's sequence frozen when it opens?
// - Prev/next walk the grid the user was looking at when they opened it
// - Searching underneath an open detail view never reshuffles navigation

mod args;
mod commands;
mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, Step};
pub use commands::run;
