//! Types shared by the employee records frontend: the `Employee` model and the
//! request contract of the employee REST API.

pub mod model;
pub mod requests;
