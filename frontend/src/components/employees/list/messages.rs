use common::model::employee::{Employee, EmployeeId};

use crate::api::ApiError;

pub enum Msg {
    Reload,
    Loaded(Vec<Employee>),
    LoadFailed(ApiError),
    Edit(EmployeeId),
    Delete(EmployeeId),
    Deleted,
    DeleteFailed { action: &'static str, error: ApiError },
}
