use async_trait::async_trait;

use super::SpecialProjectError;

#[async_trait]
pub trait NextSortOrderUseCase: Send + Sync {
    async fn execute(&self) -> Result<i32, SpecialProjectError>;
}
