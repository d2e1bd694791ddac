//! GPA computation and transcript rendering.
//!
//! Both are pure functions over a student's enrollment sequence plus the
//! course catalog (credits and titles live on the course, so they are
//! resolved at read time rather than snapshotted at enrollment).

use std::fmt::Write as _;

use crate::catalog::CourseCatalog;
use crate::model::Student;

/// Credit-weighted mean of grade points over graded enrollments.
///
/// Returns 0.0 when the student has no graded enrollment. Enrollments
/// whose course code is missing from the catalog carry no weight.
pub fn calculate_gpa(student: &Student, catalog: &CourseCatalog) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for enrollment in &student.enrollments {
        let Some(grade) = enrollment.grade else {
            continue;
        };
        let Some(course) = catalog.get(&enrollment.course_code) else {
            tracing::debug!(
                course_code = %enrollment.course_code,
                "enrollment references a course absent from the catalog"
            );
            continue;
        };
        total_points += grade.points() * course.credits as f64;
        total_credits += course.credits;
    }

    if total_credits == 0 {
        0.0
    } else {
        total_points / total_credits as f64
    }
}

/// Render the deterministic transcript report.
///
/// Header block, then a fixed-column table of graded enrollments in the
/// student's enrollment-sequence order.
pub fn generate_transcript(student: &Student, catalog: &CourseCatalog) -> String {
    let mut out = String::new();

    out.push_str("OFFICIAL TRANSCRIPT\n");
    out.push_str("===================\n");
    let _ = writeln!(out, "Student: {}", student.person.full_name);
    let _ = writeln!(out, "Registration No: {}", student.reg_no);
    let _ = writeln!(out, "Overall GPA: {:.2}\n", calculate_gpa(student, catalog));

    out.push_str("COURSE WORK\n");
    out.push_str("===========\n");

    let graded: Vec<_> = student
        .enrollments
        .iter()
        .filter(|e| e.is_graded())
        .filter_map(|e| catalog.get(&e.course_code).map(|c| (e, c)))
        .collect();

    if graded.is_empty() {
        out.push_str("No graded courses found.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10} {:<30} {:<6} {:<8} {:<10}",
        "Code", "Course Title", "Credits", "Grade", "Marks"
    );
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for (enrollment, course) in graded {
        let _ = writeln!(
            out,
            "{:<10} {:<30} {:<6} {:<8} {:<10.1}",
            course.code(),
            course.title,
            course.credits,
            enrollment.grade.map(|g| g.to_string()).unwrap_or_default(),
            enrollment.marks.unwrap_or_default(),
        );
    }

    out
}
