table! {
    activity (id) {
        id -> Text,
        activity_type -> Text,
        date -> Text,
        time -> Text,
        description -> Text,
    }
}

table! {
    company (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    student (id) {
        id -> Text,
        name -> Text,
        company_id -> Text,
        teacher_id -> Text,
        total_hours_to_do -> Double,
    }
}

table! {
    student_activity (seq) {
        seq -> Integer,
        student_id -> Text,
        activity_id -> Text,
    }
}

table! {
    teacher (id) {
        id -> Text,
        name -> Text,
    }
}

allow_tables_to_appear_in_same_query!(activity, company, student, student_activity, teacher);
