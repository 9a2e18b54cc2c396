//! Deal CRUD and CSV upload orchestration.
//!
//! Every mutation goes through the backend; the local caches are never
//! optimistically patched. Instead each successful operation chains a
//! coordinated refresh under the current filter so all widgets converge.

use validator::Validate;

use crate::client::ApiClient;
use crate::dashboard::RefreshCoordinator;
use crate::forms::deal::DealForm;
use crate::services::ServiceResult;

/// Validates the modal form and creates the deal, then refreshes.
pub async fn create_deal(
    api: &ApiClient,
    coordinator: &RefreshCoordinator,
    form: &DealForm,
) -> ServiceResult<()> {
    form.validate()?;

    api.create_deal(&form.to_new_deal()).await.map_err(|err| {
        log::error!("Failed to create deal: {err}");
        err
    })?;

    coordinator.refresh(coordinator.current_filters()).await;
    Ok(())
}

/// Validates the modal form and updates an existing deal, then refreshes.
pub async fn update_deal(
    api: &ApiClient,
    coordinator: &RefreshCoordinator,
    id: i64,
    form: &DealForm,
) -> ServiceResult<()> {
    form.validate()?;

    api.update_deal(id, &form.to_update_deal())
        .await
        .map_err(|err| {
            log::error!("Failed to update deal {id}: {err}");
            err
        })?;

    coordinator.refresh(coordinator.current_filters()).await;
    Ok(())
}

/// Deletes a deal, then refreshes.
pub async fn delete_deal(
    api: &ApiClient,
    coordinator: &RefreshCoordinator,
    id: i64,
) -> ServiceResult<()> {
    api.delete_deal(id).await.map_err(|err| {
        log::error!("Failed to delete deal {id}: {err}");
        err
    })?;

    coordinator.refresh(coordinator.current_filters()).await;
    Ok(())
}

/// Uploads a deals CSV, then refreshes so every widget reflects the import.
pub async fn upload_deals_csv(
    api: &ApiClient,
    coordinator: &RefreshCoordinator,
    file_name: String,
    bytes: Vec<u8>,
) -> ServiceResult<()> {
    api.upload_csv(file_name, bytes).await.map_err(|err| {
        log::error!("Failed to upload deals CSV: {err}");
        err
    })?;

    coordinator.refresh(coordinator.current_filters()).await;
    Ok(())
}
