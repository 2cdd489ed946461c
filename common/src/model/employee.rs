use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Opaque identifier assigned by the employee API when a record is created.
///
/// The client never builds one itself; it only carries the value it received
/// in a list or create response back to update and delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    #[cfg(any(test, feature = "test-util"))]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Salary amount, remembering the text it was read from.
///
/// The form shows that text unchanged, so a stored `"50000.00"` is edited as
/// `"50000.00"`. Two salaries are equal when their amounts are.
#[derive(Debug, Clone)]
pub struct Salary {
    amount: f64,
    text: String,
}

impl Salary {
    /// Accepts finite, non-negative numbers only. The text is kept as typed.
    pub fn parse(text: &str) -> Option<Self> {
        let amount = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)?;
        Some(Self {
            amount,
            text: text.to_string(),
        })
    }

}

impl From<f64> for Salary {
    fn from(amount: f64) -> Self {
        Self {
            amount,
            text: amount.to_string(),
        }
    }
}

impl PartialEq for Salary {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Whole salaries go out as JSON integers (`50000`, not `50000.0`).
impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self.amount;
        if amount.fract() == 0.0 && amount >= 0.0 && amount <= u64::MAX as f64 {
            serializer.serialize_u64(amount as u64)
        } else {
            serializer.serialize_f64(amount)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SalaryRepr {
    Number(f64),
    Text(String),
}

/// Accepts either a JSON number or a numeric string.
impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SalaryRepr::deserialize(deserializer)? {
            SalaryRepr::Number(n) => Ok(Salary::from(n)),
            SalaryRepr::Text(s) => match s.trim().parse::<f64>() {
                Ok(amount) => Ok(Salary { amount, text: s }),
                Err(e) => Err(serde::de::Error::custom(format!(
                    "invalid salario {s:?}: {e}"
                ))),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

/// Reads a text field that the API may have stored as a JSON scalar of any kind.
fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextRepr::deserialize(deserializer)? {
        TextRepr::Text(s) => s,
        TextRepr::Unsigned(n) => n.to_string(),
        TextRepr::Signed(n) => n.to_string(),
        TextRepr::Float(n) => n.to_string(),
        TextRepr::Bool(b) => b.to_string(),
    })
}

/// The ten business fields of an employee, without identifier.
///
/// This is the body of both create and update requests. Because it has no `_id`
/// field, a create payload cannot carry an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeData {
    #[serde(rename = "RUT_empleado", deserialize_with = "deserialize_text")]
    pub rut_empleado: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub id_cargo: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub nombre_empleado: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub telefono_empleado: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub direccion_empleado: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub correo_electronico: String,
    /// Calendar date as exchanged with the API (`YYYY-MM-DD`).
    #[serde(deserialize_with = "deserialize_text")]
    pub fecha_nacimiento: String,
    #[serde(rename = "EPS", deserialize_with = "deserialize_text")]
    pub eps: String,
    pub salario: Salary,
    #[serde(deserialize_with = "deserialize_text")]
    pub tipo_contrato: String,
}

/// A persisted employee record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,
    #[serde(flatten)]
    pub data: EmployeeData,
}

/// The business fields in display order.
///
/// Both the form inputs and the table columns are generated from `EmployeeField::ALL`
/// so the two views always agree on the field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Rut,
    Cargo,
    Nombre,
    Telefono,
    Direccion,
    Correo,
    FechaNacimiento,
    Eps,
    Salario,
    TipoContrato,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 10] = [
        EmployeeField::Rut,
        EmployeeField::Cargo,
        EmployeeField::Nombre,
        EmployeeField::Telefono,
        EmployeeField::Direccion,
        EmployeeField::Correo,
        EmployeeField::FechaNacimiento,
        EmployeeField::Eps,
        EmployeeField::Salario,
        EmployeeField::TipoContrato,
    ];

    /// JSON key used by the API.
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::Rut => "RUT_empleado",
            EmployeeField::Cargo => "id_cargo",
            EmployeeField::Nombre => "nombre_empleado",
            EmployeeField::Telefono => "telefono_empleado",
            EmployeeField::Direccion => "direccion_empleado",
            EmployeeField::Correo => "correo_electronico",
            EmployeeField::FechaNacimiento => "fecha_nacimiento",
            EmployeeField::Eps => "EPS",
            EmployeeField::Salario => "salario",
            EmployeeField::TipoContrato => "tipo_contrato",
        }
    }

    /// Label shown as input placeholder and table header.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::Rut => "RUT",
            EmployeeField::Cargo => "ID del cargo",
            EmployeeField::Nombre => "Nombre",
            EmployeeField::Telefono => "Telefono",
            EmployeeField::Direccion => "Direccion",
            EmployeeField::Correo => "Correo Electronico",
            EmployeeField::FechaNacimiento => "Fecha de Nacimiento",
            EmployeeField::Eps => "EPS",
            EmployeeField::Salario => "Salario",
            EmployeeField::TipoContrato => "Tipo de Contrato",
        }
    }

    /// HTML `type` attribute of the matching `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            EmployeeField::Correo => "email",
            EmployeeField::FechaNacimiento => "date",
            EmployeeField::Salario => "number",
            _ => "text",
        }
    }

    /// Text rendered for this field in a table cell.
    pub fn display(self, data: &EmployeeData) -> String {
        match self {
            EmployeeField::Rut => data.rut_empleado.clone(),
            EmployeeField::Cargo => data.id_cargo.clone(),
            EmployeeField::Nombre => data.nombre_empleado.clone(),
            EmployeeField::Telefono => data.telefono_empleado.clone(),
            EmployeeField::Direccion => data.direccion_empleado.clone(),
            EmployeeField::Correo => data.correo_electronico.clone(),
            EmployeeField::FechaNacimiento => data.fecha_nacimiento.clone(),
            EmployeeField::Eps => data.eps.clone(),
            EmployeeField::Salario => data.salario.to_string(),
            EmployeeField::TipoContrato => data.tipo_contrato.clone(),
        }
    }
}

/// Reasons a set of field buffers cannot become an `EmployeeData`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("El campo \"{}\" es obligatorio", .0.label())]
    Missing(EmployeeField),
    #[error("El salario debe ser un número no negativo: \"{0}\"")]
    InvalidSalary(String),
}

/// Raw text buffers behind the employee form, one per field.
///
/// `Default` is the empty create-mode form. `From<&Employee>` fills every buffer
/// from a record for edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub rut_empleado: String,
    pub id_cargo: String,
    pub nombre_empleado: String,
    pub telefono_empleado: String,
    pub direccion_empleado: String,
    pub correo_electronico: String,
    pub fecha_nacimiento: String,
    pub eps: String,
    pub salario: String,
    pub tipo_contrato: String,
}

impl EmployeeFields {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Rut => &self.rut_empleado,
            EmployeeField::Cargo => &self.id_cargo,
            EmployeeField::Nombre => &self.nombre_empleado,
            EmployeeField::Telefono => &self.telefono_empleado,
            EmployeeField::Direccion => &self.direccion_empleado,
            EmployeeField::Correo => &self.correo_electronico,
            EmployeeField::FechaNacimiento => &self.fecha_nacimiento,
            EmployeeField::Eps => &self.eps,
            EmployeeField::Salario => &self.salario,
            EmployeeField::TipoContrato => &self.tipo_contrato,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::Rut => &mut self.rut_empleado,
            EmployeeField::Cargo => &mut self.id_cargo,
            EmployeeField::Nombre => &mut self.nombre_empleado,
            EmployeeField::Telefono => &mut self.telefono_empleado,
            EmployeeField::Direccion => &mut self.direccion_empleado,
            EmployeeField::Correo => &mut self.correo_electronico,
            EmployeeField::FechaNacimiento => &mut self.fecha_nacimiento,
            EmployeeField::Eps => &mut self.eps,
            EmployeeField::Salario => &mut self.salario,
            EmployeeField::TipoContrato => &mut self.tipo_contrato,
        };
        *slot = value;
    }

    #[cfg(any(test, feature = "test-util"))]
    pub fn is_empty(&self) -> bool {
        EmployeeField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Builds the request body, rejecting blank fields and a salary that is not
    /// a non-negative number. Text values are kept exactly as typed.
    pub fn parse(&self) -> Result<EmployeeData, ValidationError> {
        if let Some(field) = EmployeeField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ValidationError::Missing(field));
        }

        let salario = Salary::parse(&self.salario)
            .ok_or_else(|| ValidationError::InvalidSalary(self.salario.clone()))?;

        Ok(EmployeeData {
            rut_empleado: self.rut_empleado.clone(),
            id_cargo: self.id_cargo.clone(),
            nombre_empleado: self.nombre_empleado.clone(),
            telefono_empleado: self.telefono_empleado.clone(),
            direccion_empleado: self.direccion_empleado.clone(),
            correo_electronico: self.correo_electronico.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
            eps: self.eps.clone(),
            salario,
            tipo_contrato: self.tipo_contrato.clone(),
        })
    }
}

impl From<&Employee> for EmployeeFields {
    fn from(employee: &Employee) -> Self {
        let mut fields = EmployeeFields::default();
        for field in EmployeeField::ALL {
            fields.set(field, field.display(&employee.data));
        }
        fields
    }
}
