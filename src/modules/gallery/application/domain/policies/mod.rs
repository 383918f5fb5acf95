mod gallery_policy;

pub use gallery_policy::GalleryPolicy;
