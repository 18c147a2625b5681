use contracts::domain::a003_offer::{CreateOfferDto, Offer, UpdateOfferDto};
use contracts::domain::common::find_by_id;

use crate::shared::api_utils::{post_json_unit, put_json_unit, ApiError};
use crate::shared::sales_document::model::fetch_documents;

pub async fn create_offer(dto: &CreateOfferDto) -> Result<(), ApiError> {
    post_json_unit("/offer/", dto).await
}

pub async fn update_offer(dto: &UpdateOfferDto) -> Result<(), ApiError> {
    put_json_unit("/offer/", dto).await
}

/// The backend has no single-offer endpoint; the offer is picked from the list.
pub async fn fetch_offer(offer_id: &str) -> Result<Offer, ApiError> {
    let offers = fetch_documents::<Offer>().await?;
    find_by_id(&offers, offer_id)
        .cloned()
        .ok_or_else(|| ApiError::Status {
            status: 404,
            message: format!("La oferta {} no existe.", offer_id),
        })
}
