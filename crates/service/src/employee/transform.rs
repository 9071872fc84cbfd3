use models::employee::EmployeeData;

use crate::employee::Employee;
use crate::record::Transform;

pub struct EmployeeTransform;

impl Transform for EmployeeTransform {
    type Model = Employee;
    type Entity = EmployeeData;

    const KIND: &'static str = "employee";

    fn model_id(employee: &Employee) -> i32 {
        employee.id
    }

    fn to_entity(employee: Employee) -> EmployeeData {
        EmployeeData {
            id: (employee.id > 0).then_some(employee.id),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            created: None,
            last_updated: None,
        }
    }

    fn to_model(data: EmployeeData) -> Employee {
        Employee {
            id: data.id.unwrap_or_default(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            department: data.department,
            created: data.created,
            last_updated: data.last_updated,
        }
    }

    fn overwrite(data: &mut EmployeeData, employee: Employee) {
        data.first_name = employee.first_name;
        data.last_name = employee.last_name;
        data.email = employee.email;
        data.department = employee.department;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_fields_and_positive_id() {
        let input = Employee {
            id: 4,
            first_name: "Bo".into(),
            last_name: "Kim".into(),
            email: "bo@x.com".into(),
            department: "Ops".into(),
            ..Default::default()
        };
        let back = EmployeeTransform::to_model(EmployeeTransform::to_entity(input.clone()));
        assert_eq!(back, input);
    }

    #[test]
    fn zero_id_means_new() {
        let data = EmployeeTransform::to_entity(Employee::default());
        assert_eq!(data.id, None);
    }
}
