//! Static HTML gallery.
//!
//! Card markup and modal markup follow the directory's web layout. Modals
//! are plain anchors (`#user-N`) shown with `:target`, so the page works
//! without scripts; prev/next anchors wrap around the grid.

use std::fmt;

use crate::presentation::formatters::escape_html;
use crate::presentation::view_models::{CardViewModel, DetailViewModel, GalleryViewModel};

const STYLE: &str = r#"
        body { font-family: sans-serif; background: #f6f6f6; margin: 0; }
        header { padding: 1em 2em; }
        .gallery { display: flex; flex-wrap: wrap; gap: 1em; padding: 1em 2em; }
        .card { display: flex; background: #fff; border: 1px solid #ddd; border-radius: 0.25em; width: 22em; }
        .card a { color: inherit; text-decoration: none; display: flex; padding: 0.75em; }
        .card-img { border-radius: 50%; width: 5em; height: 5em; margin-right: 1em; }
        .cap { text-transform: capitalize; }
        .modal-container { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); }
        .modal-container:target { display: block; }
        .modal { position: relative; width: 20em; margin: 10vh auto 0; padding: 1em; background: #fff; border-radius: 0.25em; text-align: center; }
        .modal-close-btn { position: absolute; top: 0.5em; right: 0.75em; color: #000; text-decoration: none; }
        .modal-img { border-radius: 50%; width: 8em; height: 8em; }
        .modal-btn-container { width: 22em; margin: 0.5em auto; display: flex; justify-content: space-between; }
        .btn { background: #fff; color: #000; padding: 0.5em 1.5em; border-radius: 0.25em; text-decoration: none; }
"#;

pub struct GalleryPage<'a> {
    model: &'a GalleryViewModel,
}

impl<'a> GalleryPage<'a> {
    pub fn new(model: &'a GalleryViewModel) -> Self {
        Self { model }
    }

    fn write_card(f: &mut fmt::Formatter, card: &CardViewModel) -> fmt::Result {
        writeln!(f, r#"        <div class="card" id="card-{}">"#, card.number)?;
        writeln!(f, r##"            <a href="#user-{}">"##, card.number)?;
        writeln!(f, r#"                <div class="card-img-container">"#)?;
        writeln!(
            f,
            r#"                    <img class="card-img" src="{}" alt="profile picture">"#,
            escape_html(&card.picture)
        )?;
        writeln!(f, "                </div>")?;
        writeln!(f, r#"                <div class="card-info-container">"#)?;
        writeln!(
            f,
            r#"                    <h3 class="card-name cap">{}</h3>"#,
            escape_html(&card.name)
        )?;
        writeln!(
            f,
            r#"                    <p class="card-text">{}</p>"#,
            escape_html(&card.email)
        )?;
        writeln!(
            f,
            r#"                    <p class="card-text cap">{}, {}</p>"#,
            escape_html(&card.city),
            escape_html(&card.state)
        )?;
        writeln!(f, "                </div>")?;
        writeln!(f, "            </a>")?;
        writeln!(f, "        </div>")
    }

    fn write_modal(f: &mut fmt::Formatter, detail: &DetailViewModel) -> fmt::Result {
        writeln!(
            f,
            r#"    <div class="modal-container" id="user-{}">"#,
            detail.number
        )?;
        writeln!(f, r#"        <div class="modal">"#)?;
        writeln!(
            f,
            r##"            <a href="#gallery" id="modal-close-btn" class="modal-close-btn"><strong>X</strong></a>"##
        )?;
        writeln!(f, r#"            <div class="modal-info-container">"#)?;
        writeln!(
            f,
            r#"                <img class="modal-img" src="{}" alt="profile picture">"#,
            escape_html(&detail.picture)
        )?;
        writeln!(
            f,
            r#"                <h3 class="modal-name cap">{}</h3>"#,
            escape_html(&detail.name)
        )?;
        writeln!(
            f,
            r#"                <p class="modal-text">{}</p>"#,
            escape_html(&detail.email)
        )?;
        writeln!(
            f,
            r#"                <p class="modal-text cap">{}</p>"#,
            escape_html(&detail.city)
        )?;
        writeln!(f, "                <hr>")?;
        writeln!(
            f,
            r#"                <p class="modal-text">{}</p>"#,
            escape_html(&detail.phone)
        )?;
        writeln!(
            f,
            r#"                <p class="modal-text">{}</p>"#,
            escape_html(&detail.address)
        )?;
        writeln!(
            f,
            r#"                <p class="modal-text">Birthday: {}</p>"#,
            escape_html(&detail.birthday)
        )?;
        writeln!(f, "            </div>")?;
        writeln!(f, "        </div>")?;
        writeln!(f, r#"        <div class="modal-btn-container">"#)?;
        writeln!(
            f,
            r##"            <a href="#user-{}" class="modal-prev btn">Prev</a>"##,
            detail.prev_number
        )?;
        writeln!(
            f,
            r##"            <a href="#user-{}" class="modal-next btn">Next</a>"##,
            detail.next_number
        )?;
        writeln!(f, "        </div>")?;
        writeln!(f, "    </div>")
    }
}

impl<'a> fmt::Display for GalleryPage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid = &self.model.grid;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"    <meta charset="UTF-8">"#)?;
        writeln!(f, "    <title>Employee Directory</title>")?;
        writeln!(f, "    <style>{}    </style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <header>")?;
        writeln!(f, "        <h1>Employee Directory</h1>")?;
        if let Some(query) = &grid.query {
            writeln!(
                f,
                r#"        <p class="search-summary">Search: {} ({} of {})</p>"#,
                escape_html(query),
                grid.cards.len(),
                grid.total
            )?;
        }
        writeln!(f, "    </header>")?;

        writeln!(f, r#"    <div id="gallery" class="gallery">"#)?;
        match &grid.placeholder {
            Some(placeholder) => writeln!(f, "        <h2>{}</h2>", escape_html(placeholder))?,
            None => {
                for card in &grid.cards {
                    Self::write_card(f, card)?;
                }
            }
        }
        writeln!(f, "    </div>")?;

        for detail in &self.model.details {
            Self::write_modal(f, detail)?;
        }

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
