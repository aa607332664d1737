use iced::widget::image::Handle;
use image::imageops::FilterType;

use super::listing::ImageRecord;

/// Pixel size of gallery tiles (and of the thumbnails requested for them)
pub const THUMB_WIDTH: u32 = 260;
pub const THUMB_HEIGHT: u32 = 200;

/// Build a size-parameterized picsum URL for a record.
///
/// The listing's `download_url` points at the full-resolution original, which
/// is far too heavy for a grid tile; picsum serves the same photo at any size
/// via its id.
pub fn thumb_url(record: &ImageRecord) -> String {
    format!(
        "https://picsum.photos/id/{}/{}/{}",
        record.id, THUMB_WIDTH, THUMB_HEIGHT
    )
}

/// Download and decode one tile thumbnail.
///
/// Returns `None` on any failure; the tile simply keeps its placeholder.
/// Failures are logged and never retried.
pub async fn fetch_thumb(client: reqwest::Client, url: String) -> Option<Handle> {
    let bytes = match download(client, &url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("⚠️  Thumbnail download failed for {}: {}", url, err);
            return None;
        }
    };

    let handle = decode_thumb(&bytes);
    if handle.is_none() {
        eprintln!("⚠️  Could not decode thumbnail from {}", url);
    }
    handle
}

async fn download(client: reqwest::Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(bytes.to_vec())
}

/// Decode image bytes and fit them to the tile size.
fn decode_thumb(data: &[u8]) -> Option<Handle> {
    let img = image::load_from_memory(data).ok()?;

    // The server already delivers tile-sized images; this is a cheap no-op
    // then, and a real resize for anything unexpected.
    let thumb = img.resize_to_fill(THUMB_WIDTH, THUMB_HEIGHT, FilterType::Triangle);

    let rgba = thumb.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}
