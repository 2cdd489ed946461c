//! Request contract of the employee REST API.
//!
//! Every call the frontend makes is described by an [`EmployeeRequest`]. Method,
//! path and body are all derived here from [`API_PATH`], so list, create, update
//! and delete can never drift apart on endpoint naming.

use crate::model::employee::{EmployeeData, EmployeeId};

/// Base path of the employee collection.
pub const API_PATH: &str = "/api/empleados";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeRequest {
    /// `GET /api/empleados`
    List,
    /// `POST /api/empleados`, body without identifier.
    Create(EmployeeData),
    /// `PUT /api/empleados/{id}`
    Update { id: EmployeeId, data: EmployeeData },
    /// `DELETE /api/empleados/{id}`
    Delete(EmployeeId),
}

impl EmployeeRequest {
    /// Create when nothing is being edited, update addressed to the edited record otherwise.
    pub fn save(editing: Option<&EmployeeId>, data: EmployeeData) -> Self {
        match editing {
            Some(id) => EmployeeRequest::Update {
                id: id.clone(),
                data,
            },
            None => EmployeeRequest::Create(data),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            EmployeeRequest::List => Method::Get,
            EmployeeRequest::Create(_) => Method::Post,
            EmployeeRequest::Update { .. } => Method::Put,
            EmployeeRequest::Delete(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            EmployeeRequest::List | EmployeeRequest::Create(_) => API_PATH.to_string(),
            EmployeeRequest::Update { id, .. } | EmployeeRequest::Delete(id) => {
                format!("{}/{}", API_PATH, id)
            }
        }
    }

    pub fn body(&self) -> Option<&EmployeeData> {
        match self {
            EmployeeRequest::Create(data) | EmployeeRequest::Update { data, .. } => Some(data),
            EmployeeRequest::List | EmployeeRequest::Delete(_) => None,
        }
    }

    /// Infinitive used in user-facing error messages ("Error al {action}").
    pub fn action(&self) -> &'static str {
        match self {
            EmployeeRequest::List => "cargar los empleados",
            EmployeeRequest::Create(_) => "crear el empleado",
            EmployeeRequest::Update { .. } => "actualizar el empleado",
            EmployeeRequest::Delete(_) => "eliminar el empleado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::{EmployeeField, EmployeeFields};

    fn data() -> EmployeeData {
        let mut fields = EmployeeFields::default();
        for field in EmployeeField::ALL {
            fields.set(field, "1".to_string());
        }
        fields.parse().unwrap()
    }

    #[test]
    fn all_operations_share_the_collection_path() {
        let id = EmployeeId::new("abc123");
        let requests = [
            EmployeeRequest::List,
            EmployeeRequest::Create(data()),
            EmployeeRequest::Update {
                id: id.clone(),
                data: data(),
            },
            EmployeeRequest::Delete(id),
        ];
        for request in &requests {
            assert!(request.path().starts_with("/api/empleados"));
        }
        assert_eq!(requests[0].path(), "/api/empleados");
        assert_eq!(requests[1].path(), "/api/empleados");
        assert_eq!(requests[2].path(), "/api/empleados/abc123");
        assert_eq!(requests[3].path(), "/api/empleados/abc123");
    }

    #[test]
    fn methods_match_rest_semantics() {
        let id = EmployeeId::new("1");
        assert_eq!(EmployeeRequest::List.method(), Method::Get);
        assert_eq!(EmployeeRequest::Create(data()).method(), Method::Post);
        assert_eq!(
            EmployeeRequest::save(Some(&id), data()).method(),
            Method::Put
        );
        assert_eq!(EmployeeRequest::Delete(id).method(), Method::Delete);
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn save_without_selection_creates() {
        let request = EmployeeRequest::save(None, data());
        assert_eq!(request, EmployeeRequest::Create(data()));
        assert_eq!(request.path(), API_PATH);
    }

    #[test]
    fn save_with_selection_updates_that_record() {
        let id = EmployeeId::new("42");
        let request = EmployeeRequest::save(Some(&id), data());
        assert_eq!(request.path(), "/api/empleados/42");
        assert_eq!(request.body(), Some(&data()));
    }

    #[test]
    fn list_and_delete_have_no_body() {
        assert!(EmployeeRequest::List.body().is_none());
        assert!(EmployeeRequest::Delete(EmployeeId::new("1")).body().is_none());
    }
}
