use std::path::Path;

use userdeck_engine::{CardKey, DirectoryController};
use userdeck_types::UserRecord;

use crate::presentation::formatters::format_birthday;
use crate::presentation::view_models::{
    CardViewModel, DetailViewModel, ExportResultViewModel, GalleryViewModel, GridViewModel,
};

fn present_card(key: CardKey, user: &UserRecord) -> CardViewModel {
    CardViewModel {
        number: key.number(),
        name: user.full_name(),
        email: user.email.clone(),
        city: user.location.city.clone(),
        state: user.location.state.clone(),
        picture: user.picture.large.clone(),
    }
}

pub fn present_grid(controller: &DirectoryController) -> GridViewModel {
    let grid = controller.grid();
    let collection = controller.collection();

    let cards = grid
        .slots()
        .iter()
        .filter_map(|slot| {
            collection
                .get(slot.key.position())
                .map(|user| present_card(slot.key, user))
        })
        .collect();

    GridViewModel {
        cards,
        total: collection.len(),
        query: controller.query().map(str::to_string),
        placeholder: grid.placeholder().map(str::to_string),
    }
}

/// View model for the open detail view, if any
pub fn present_detail(controller: &DirectoryController) -> Option<DetailViewModel> {
    let key = controller.selected_key()?;
    let user = controller.selected()?;
    let index = controller.selection_index()?;
    let of = controller.selection_len()?;
    let (prev, next) = controller.neighbors()?;

    let location = &user.location;
    let address = format!(
        "{}, {}, {}, {} {}",
        location.street.number, location.street.name, location.city, location.state, location.postcode
    );

    Some(DetailViewModel {
        number: key.number(),
        name: user.full_name(),
        email: user.email.clone(),
        picture: user.picture.large.clone(),
        city: location.city.clone(),
        phone: user.phone.clone(),
        address,
        dob: user.dob.date.clone(),
        birthday: format_birthday(&user.dob.date),
        position: index + 1,
        of,
        prev_number: prev.number(),
        next_number: next.number(),
    })
}

/// Grid plus the detail view of every card in it, in grid order.
///
/// Opens each card in turn, so any detail view open beforehand is closed.
pub fn present_gallery(controller: &mut DirectoryController) -> GalleryViewModel {
    let grid = present_grid(controller);

    let mut details = Vec::with_capacity(controller.active_len());
    for index in 0..controller.active_len() {
        if controller.select(index).is_ok()
            && let Some(detail) = present_detail(controller)
        {
            details.push(detail);
        }
    }
    controller.close_selection();

    GalleryViewModel { grid, details }
}

pub fn present_export(output: &Path, cards: usize, bytes: usize) -> ExportResultViewModel {
    ExportResultViewModel {
        output: output.to_path_buf(),
        cards,
        bytes,
    }
}
