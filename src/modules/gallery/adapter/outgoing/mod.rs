mod gallery_query_postgres;
mod gallery_sql;
mod gallery_unit_of_work_postgres;

pub use gallery_query_postgres::GalleryQueryPostgres;
pub use gallery_unit_of_work_postgres::{GalleryTxPostgres, GalleryUnitOfWorkPostgres};
