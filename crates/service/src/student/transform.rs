use models::student::StudentData;

use crate::record::Transform;
use crate::student::Student;

pub struct StudentTransform;

impl Transform for StudentTransform {
    type Model = Student;
    type Entity = StudentData;

    const KIND: &'static str = "student";

    fn model_id(student: &Student) -> i32 {
        student.id
    }

    fn to_entity(student: Student) -> StudentData {
        StudentData {
            id: (student.id > 0).then_some(student.id),
            first_name: student.first_name,
            last_name: student.last_name,
            student_number: student.student_number,
            email: student.email,
            department: student.department,
            created: None,
            last_updated: None,
        }
    }

    fn to_model(data: StudentData) -> Student {
        Student {
            id: data.id.unwrap_or_default(),
            first_name: data.first_name,
            last_name: data.last_name,
            student_number: data.student_number,
            email: data.email,
            department: data.department,
            created: data.created,
            last_updated: data.last_updated,
        }
    }

    fn overwrite(data: &mut StudentData, student: Student) {
        data.first_name = student.first_name;
        data.last_name = student.last_name;
        data.student_number = student.student_number;
        data.email = student.email;
        data.department = student.department;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::record::now;

    fn ann(id: i32) -> Student {
        Student {
            id,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            student_number: "S100".into(),
            email: "a@x.com".into(),
            department: "CS".into(),
            created: Some(now()),
            last_updated: Some(now()),
        }
    }

    #[test]
    fn non_positive_id_is_left_unset() {
        for id in [0, -1, i32::MIN] {
            let data = StudentTransform::to_entity(ann(id));
            assert_eq!(data.id, None);
        }
    }

    #[test]
    fn positive_id_is_carried_and_timestamps_dropped() {
        let data = StudentTransform::to_entity(ann(12));
        assert_eq!(data.id, Some(12));
        assert_eq!(data.created, None);
        assert_eq!(data.last_updated, None);
    }

    #[test]
    fn round_trip_preserves_mutable_fields() {
        for id in [0, 5] {
            let input = ann(id);
            let back = StudentTransform::to_model(StudentTransform::to_entity(input.clone()));
            assert_eq!(back.first_name, input.first_name);
            assert_eq!(back.last_name, input.last_name);
            assert_eq!(back.student_number, input.student_number);
            assert_eq!(back.email, input.email);
            assert_eq!(back.department, input.department);
            assert_eq!(back.id, if id > 0 { id } else { 0 });
        }
    }

    #[test]
    fn to_model_copies_store_fields() {
        let t = now();
        let data = StudentData { id: Some(9), created: Some(t), last_updated: Some(t), ..Default::default() };
        let s = StudentTransform::to_model(data);
        assert_eq!(s.id, 9);
        assert_eq!(s.created, Some(t));
        assert_eq!(s.last_updated, Some(t));
    }

    #[test]
    fn overwrite_touches_only_mutable_fields() {
        let t = now();
        let mut data = StudentData { id: Some(3), created: Some(t), last_updated: Some(t), ..Default::default() };
        let mut input = ann(77);
        input.created = None;
        StudentTransform::overwrite(&mut data, input);
        assert_eq!(data.id, Some(3));
        assert_eq!(data.created, Some(t));
        assert_eq!(data.first_name, "Ann");
        assert_eq!(data.student_number, "S100");
    }
}
