use iced::widget::image::Handle;
use iced::widget::scrollable::Viewport;
use iced::widget::{column, scrollable};
use iced::{Alignment, Element, Length, Task, Theme};

mod api;
mod state;
mod ui;

use api::listing::{FetchError, ImageRecord};
use state::gallery::GalleryState;

/// Main application state
struct Gallery {
    /// Accumulated records plus the pagination state machine
    gallery: GalleryState,
    /// Shared HTTP client for listing pages and thumbnails
    client: reqwest::Client,
    /// Tile thumbnails, indexed in step with the records.
    /// `None` while the download task is outstanding or after it failed.
    thumbs: Vec<Option<Handle>>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A page request finished, successfully or not
    PageLoaded(Result<Vec<ImageRecord>, FetchError>),
    /// The grid was scrolled; carries the new viewport geometry
    Scrolled(Viewport),
    /// A thumbnail download task finished for the given tile
    ThumbLoaded(usize, Option<Handle>),
    /// User clicked a tile
    TileClicked(usize),
}

impl Gallery {
    /// Create the application and fire the automatic page-1 fetch
    fn new() -> (Self, Task<Message>) {
        let client = reqwest::Client::new();
        let mut gallery = GalleryState::new();

        println!("🖼️  Picsum gallery starting up");

        // A fresh state machine is always idle, so this always yields page 1
        let task = match gallery.initial_fetch() {
            Some(page) => fetch_page_task(&client, page),
            None => Task::none(),
        };

        (
            Gallery {
                gallery,
                client,
                thumbs: Vec::new(),
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(viewport) => {
                let visible = ui::sentinel::sentinel_visible(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                );

                if let Some(page) = self.gallery.on_sentinel(visible) {
                    println!("📥 Fetching page {}...", page);
                    return fetch_page_task(&self.client, page);
                }

                Task::none()
            }
            Message::PageLoaded(Ok(page)) => {
                let start = self.gallery.len();

                println!(
                    "✅ Page {}: {} images ({} total)",
                    self.gallery.cursor(),
                    page.len(),
                    start + page.len()
                );

                // One download task per new tile, each writing its own slot
                let mut tasks = Vec::with_capacity(page.len());
                for (offset, record) in page.iter().enumerate() {
                    let index = start + offset;
                    let url = api::thumbs::thumb_url(record);
                    tasks.push(Task::perform(
                        api::thumbs::fetch_thumb(self.client.clone(), url),
                        move |handle| Message::ThumbLoaded(index, handle),
                    ));
                }

                self.thumbs.resize(start + page.len(), None);
                self.gallery.complete_fetch(page);

                Task::batch(tasks)
            }
            Message::PageLoaded(Err(err)) => {
                // Non-fatal: log, clear the in-flight state, keep what we have
                eprintln!("⚠️  Error fetching images: {}", err);
                self.gallery.fail_fetch();
                Task::none()
            }
            Message::ThumbLoaded(index, handle) => {
                if let Some(slot) = self.thumbs.get_mut(index) {
                    *slot = handle;
                }
                Task::none()
            }
            Message::TileClicked(index) => {
                if let Some(record) = self.gallery.records().get(index) {
                    if let Err(err) = open::that(&record.url) {
                        eprintln!("⚠️  Could not open {}: {}", record.url, err);
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = column![ui::grid::gallery_grid(
            self.gallery.records(),
            &self.thumbs
        )]
        .spacing(20)
        .padding(20)
        .align_x(Alignment::Center);

        if self.gallery.is_fetching() {
            content = content.push(ui::grid::loading_caption());
        }

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Launch the listing request for one page as a background task
fn fetch_page_task(client: &reqwest::Client, page: u32) -> Task<Message> {
    Task::perform(
        api::listing::fetch_page(client.clone(), page),
        Message::PageLoaded,
    )
}

fn main() -> iced::Result {
    iced::application("Picsum Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}
