use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Repayment
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_repayment(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::repayment::RepaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_calc_core::repayment::quote_repayment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rate solver
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_rate(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::rate_solver::RateSolveInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_calc_core::rate_solver::estimate_rate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedule and savings
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_calc_core::schedule::amortize(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_rate_cut(input_json: String) -> NapiResult<String> {
    let input: mortgage_calc_core::savings::RateCutInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_calc_core::savings::project_rate_cut(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn flavor_message() -> String {
    mortgage_calc_core::flavor::random_message().to_string()
}
