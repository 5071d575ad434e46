use actix_web::{post, web, Responder};
use fitplan_model::{calculator::predict_plan, plan::PlanResult};
use log::{debug, warn};

use crate::request::{parse_profile, RequestError};

fn plan_for(body: &[u8]) -> Result<PlanResult, RequestError> {
    let profile = parse_profile(body)?;
    let plan = predict_plan(&profile)?;
    debug!(
        "Computed {} kcal {} plan for {:?}",
        plan.daily_calories, plan.workout_plan.kind, profile
    );
    Ok(plan)
}

#[post("/predict")]
async fn predict(body: web::Bytes) -> Result<impl Responder, RequestError> {
    let plan = plan_for(&body).map_err(|e| {
        warn!("Rejecting plan request: {}", e);
        e
    })?;

    Ok(web::Json(plan))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(predict);
}
