mod gallery_query;
mod gallery_store;

pub use gallery_query::{BlobReferences, GalleryQuery, GalleryQueryError};
pub use gallery_store::{
    GalleryRepositoryError, GalleryRows, GalleryTransaction, ParentRows, UnitOfWork,
};
