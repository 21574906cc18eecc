//! Media classification for listing posts.

use crate::api::types::Post;
use crate::media::item::Classified;

/// URL suffixes treated as directly viewable media.
const MEDIA_EXTENSIONS: [&str; 4] = [".gif", ".jpg", ".jpeg", ".png"];

/// Sort a post into media or non-media based on its URL.
///
/// Posts whose URL does not point at media directly are given a second
/// chance through their preview data: a preview source URL that passes
/// the same extension check replaces the post's URL. A post that misses
/// both ways is returned with its URL untouched.
pub fn classify(mut post: Post) -> Classified {
    if has_media_extension(&normalize(&post.url)) {
        return Classified::Media(post);
    }

    if let Some(fallback) = preview_fallback(&post) {
        if has_media_extension(&normalize(&fallback)) {
            post.url = fallback;
            return Classified::Media(post);
        }
    }

    Classified::NonMedia(post)
}

/// Lowercase a URL and strip everything from the first query separator.
fn normalize(url: &str) -> String {
    let lower = url.to_lowercase();
    match lower.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => lower,
    }
}

fn has_media_extension(normalized: &str) -> bool {
    MEDIA_EXTENSIONS
        .iter()
        .any(|extension| normalized.ends_with(extension))
}

/// Best preview source URL, if the post has one.
///
/// Prefers the primary image source and falls back to the GIF variant.
fn preview_fallback(post: &Post) -> Option<String> {
    let image = post.preview.as_ref()?.images.first()?;

    image
        .source
        .as_ref()
        .and_then(|source| source.url.clone())
        .or_else(|| {
            image
                .variants
                .gif
                .as_ref()
                .and_then(|variant| variant.source.as_ref())
                .and_then(|source| source.url.clone())
        })
}
