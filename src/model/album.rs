//! The album: every page and the order of photos on it.
//!
//! This is the single source of truth for placement. A photo identity lives
//! on at most one page; construction refuses anything else, and drops only
//! ever move an identity, never copy it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::{Page, PageEntry, PageId, Photo, PhotoId};
use crate::engine::DropOutcome;
use crate::error::AlbumError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Page>", into = "Vec<Page>")]
pub struct Album {
    pages: Vec<Page>,
}

impl Album {
    pub fn new(pages: Vec<Page>) -> Result<Self, AlbumError> {
        check_unique(&pages)?;
        Ok(Self { pages })
    }

    /// Build pages from the host's dataset. Pages are named `page-{i}` and
    /// photos `photo-{n}`, with `n` counting across the whole album.
    pub fn from_entries(entries: &[PageEntry]) -> (Self, Vec<Photo>) {
        let mut photos = Vec::new();
        let pages = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let ids = entry
                    .images
                    .iter()
                    .map(|src| {
                        let id = PhotoId(format!("photo-{}", photos.len()));
                        photos.push(Photo { id: id.clone(), src: src.clone() });
                        id
                    })
                    .collect();
                Page {
                    id: PageId(format!("page-{}", i)),
                    title: entry.title.clone(),
                    photos: ids,
                }
            })
            .collect();
        (Self { pages }, photos)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn page_index(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    /// Page index and slot of `photo`.
    pub fn locate(&self, photo: &PhotoId) -> Option<(usize, usize)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(i, page)| page.position(photo).map(|slot| (i, slot)))
    }

    pub fn photo_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Apply a resolved drop. Pages are replaced by id; pages the outcome
    /// does not mention are left alone.
    pub fn commit(&mut self, outcome: &DropOutcome) {
        for updated in &outcome.updated_pages {
            if let Some(page) = self.pages.iter_mut().find(|p| p.id == updated.id) {
                page.photos = updated.photos.clone();
            }
        }
    }
}

fn check_unique(pages: &[Page]) -> Result<(), AlbumError> {
    let mut page_ids = HashSet::new();
    let mut photo_ids = HashSet::new();
    for page in pages {
        if !page_ids.insert(&page.id) {
            return Err(AlbumError::DuplicatePage(page.id.clone()));
        }
        for photo in &page.photos {
            if !photo_ids.insert(photo) {
                return Err(AlbumError::DuplicatePhoto(photo.clone()));
            }
        }
    }
    Ok(())
}

impl TryFrom<Vec<Page>> for Album {
    type Error = AlbumError;

    fn try_from(pages: Vec<Page>) -> Result<Self, Self::Error> {
        Album::new(pages)
    }
}

impl From<Album> for Vec<Page> {
    fn from(album: Album) -> Self {
        album.pages
    }
}
