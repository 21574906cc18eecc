//! Classification result for a post.

use crate::api::types::Post;

/// A post sorted into media or non-media.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Media(Post),
    NonMedia(Post),
}

impl Classified {
    pub fn is_media(&self) -> bool {
        matches!(self, Classified::Media(_))
    }

    pub fn into_post(self) -> Post {
        match self {
            Classified::Media(post) | Classified::NonMedia(post) => post,
        }
    }
}
