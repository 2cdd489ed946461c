use common::model::employee::{Employee, EmployeeField};

use crate::api::ApiError;

pub enum Msg {
    SetField(EmployeeField, String),
    Submit,
    Saved(Employee),
    SaveFailed { action: &'static str, error: ApiError },
    Cancel,
}
