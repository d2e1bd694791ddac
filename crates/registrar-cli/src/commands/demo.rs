//! The `registrar demo` command: a self-contained in-memory session.

use anyhow::Result;
use registrar_core::Registry;
use registrar_io::sample::seed_sample_data;

pub fn execute() -> Result<()> {
    let mut registry = Registry::new();
    seed_sample_data(&mut registry)?;

    println!("Students");
    println!("{}", super::list::student_table(&registry));

    println!("\nCourses");
    println!("{}", super::list::course_table(&registry));

    println!("\nCourse averages");
    for course in registry.courses.list() {
        println!(
            "  {:<10} {:.2}",
            course.code(),
            registry.course_average(course.code())
        );
    }

    println!();
    for student in registry.students.list() {
        println!("{}", registry.generate_transcript(student.id())?);
    }

    Ok(())
}
