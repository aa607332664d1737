use iced::widget::image::Handle;
use iced::widget::{column, container, image, mouse_area, text};
use iced::{mouse, Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::api::listing::ImageRecord;
use crate::api::thumbs::{THUMB_HEIGHT, THUMB_WIDTH};
use crate::Message;

/// The responsive thumbnail grid: one tile per record, wrapped to the
/// window width. Pure function of the records and their thumbnail slots.
pub fn gallery_grid<'a>(
    records: &'a [ImageRecord],
    thumbs: &'a [Option<Handle>],
) -> Element<'a, Message> {
    let tiles = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            tile(index, record, thumbs.get(index).and_then(Option::as_ref))
        })
        .collect();

    Wrap::with_elements(tiles)
        .spacing(15.0)
        .line_spacing(20.0)
        .into()
}

/// One clickable tile: thumbnail (or placeholder) over the author caption.
fn tile<'a>(
    index: usize,
    record: &'a ImageRecord,
    thumb: Option<&Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumb {
        Some(handle) => image(handle.clone())
            .width(THUMB_WIDTH as f32)
            .height(THUMB_HEIGHT as f32)
            .content_fit(ContentFit::Cover)
            .into(),
        // Thumbnail still downloading (or failed); hold the tile's footprint
        None => container(text("·").size(28))
            .width(THUMB_WIDTH as f32)
            .height(THUMB_HEIGHT as f32)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(container::rounded_box)
            .into(),
    };

    mouse_area(
        column![picture, text(&record.author).size(14)]
            .spacing(6)
            .align_x(Alignment::Center),
    )
    .on_press(Message::TileClicked(index))
    .interaction(mouse::Interaction::Pointer)
    .into()
}

/// Transient caption shown under the grid while a page request is in flight
pub fn loading_caption<'a>() -> Element<'a, Message> {
    container(text("Loading more images...").size(18))
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding(20)
        .into()
}
