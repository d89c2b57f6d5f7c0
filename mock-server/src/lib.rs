use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const CREATED_MESSAGE: &str = "Employee created successfully";
pub const DUPLICATE_MESSAGE: &str = "Employee already exists";
pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

/// The seven-key body posted by the employee form. Every key is required.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "DateOfJoining")]
    pub date_of_joining: String,
    #[serde(rename = "Role")]
    pub role: String,
}

/// A stored employee: the posted fields plus a server-assigned record id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: NewEmployee,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl Message {
    fn text(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            id: None,
        })
    }
}

pub type Db = Arc<RwLock<Vec<Employee>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/{employee_id}", get(get_employee))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    Json(db.read().await.clone())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<NewEmployee>,
) -> (StatusCode, Json<Message>) {
    let mut employees = db.write().await;
    if employees
        .iter()
        .any(|e| e.fields.employee_id == input.employee_id)
    {
        return (StatusCode::CONFLICT, Message::text(DUPLICATE_MESSAGE));
    }
    let employee = Employee {
        id: Uuid::new_v4(),
        fields: input,
    };
    info!(
        "created employee {} ({})",
        employee.fields.employee_id, employee.id
    );
    let id = employee.id;
    employees.push(employee);
    (
        StatusCode::CREATED,
        Json(Message {
            message: CREATED_MESSAGE.to_string(),
            id: Some(id),
        }),
    )
}

async fn get_employee(
    State(db): State<Db>,
    Path(employee_id): Path<String>,
) -> Result<Json<Employee>, (StatusCode, Json<Message>)> {
    let employees = db.read().await;
    employees
        .iter()
        .find(|e| e.fields.employee_id == employee_id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, Message::text(NOT_FOUND_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewEmployee {
        NewEmployee {
            employee_id: "E1".to_string(),
            name: "Ann".to_string(),
            email: "ann@co.com".to_string(),
            phone_number: "1234567890".to_string(),
            department: "Eng".to_string(),
            date_of_joining: "2020-01-01".to_string(),
            role: "Dev".to_string(),
        }
    }

    #[test]
    fn employee_serializes_flat() {
        let employee = Employee {
            id: Uuid::nil(),
            fields: sample(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["EmployeeID"], "E1");
        assert_eq!(json["DateOfJoining"], "2020-01-01");
    }

    #[test]
    fn new_employee_rejects_missing_key() {
        let result: Result<NewEmployee, _> = serde_json::from_str(
            r#"{"EmployeeID":"E1","Name":"Ann","Email":"a@b","PhoneNumber":"1234567890","Department":"Eng","Role":"Dev"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_employee_reads_wire_keys() {
        let input: NewEmployee = serde_json::from_value(serde_json::json!({
            "EmployeeID": "E1",
            "Name": "Ann",
            "Email": "ann@co.com",
            "PhoneNumber": "1234567890",
            "Department": "Eng",
            "DateOfJoining": "2020-01-01",
            "Role": "Dev"
        }))
        .unwrap();
        assert_eq!(input, sample());
    }

    #[test]
    fn message_omits_missing_id() {
        let json = serde_json::to_value(Message::text(DUPLICATE_MESSAGE).0).unwrap();
        assert_eq!(json, serde_json::json!({"message": DUPLICATE_MESSAGE}));
    }
}
