use std::sync::Arc;

use crate::special_project::application::ports::incoming::use_cases::{
    CreateSpecialProjectUseCase, DeleteSpecialProjectUseCase, ListSpecialProjectsUseCase,
    NextSortOrderUseCase, UpdateSpecialProjectUseCase,
};

#[derive(Clone)]
pub struct SpecialProjectUseCases {
    pub list: Arc<dyn ListSpecialProjectsUseCase + Send + Sync>,
    pub next_sort_order: Arc<dyn NextSortOrderUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSpecialProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSpecialProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSpecialProjectUseCase + Send + Sync>,
}
