mod special_project_repository_postgres;

pub use special_project_repository_postgres::SpecialProjectRepositoryPostgres;
