use criterion::{black_box, criterion_group, criterion_main, Criterion};

use registrar_core::model::{Course, CourseConfig, Student};
use registrar_core::transcript::{calculate_gpa, generate_transcript};
use registrar_core::Registry;

fn populated_registry(students: usize, courses_per_student: usize) -> Registry {
    let mut reg = Registry::new();
    for c in 0..courses_per_student {
        reg.courses.add(
            Course::new(
                format!("C{c:03}"),
                format!("Course {c}"),
                CourseConfig {
                    credits: 1,
                    ..CourseConfig::default()
                },
            )
            .unwrap(),
        );
    }
    for s in 0..students {
        let id = format!("S{s:04}");
        reg.students
            .add(Student::new(&id, format!("R{s:04}"), format!("Student {s}"), "s@edu"))
            .unwrap();
        for c in 0..courses_per_student {
            reg.enroll(&id, &format!("C{c:03}")).unwrap();
            reg.record_grade(&id, &format!("C{c:03}"), (40 + (s + c) % 60) as f64)
                .unwrap();
        }
    }
    reg
}

fn bench_gpa(c: &mut Criterion) {
    let reg = populated_registry(200, 6);
    let student = reg.students.get("S0000").unwrap();

    c.bench_function("calculate_gpa_6_courses", |b| {
        b.iter(|| black_box(calculate_gpa(black_box(student), &reg.courses)))
    });

    c.bench_function("transcript_6_courses", |b| {
        b.iter(|| black_box(generate_transcript(black_box(student), &reg.courses)))
    });

    c.bench_function("gpa_ranking_200_students", |b| {
        b.iter(|| black_box(reg.students_with_gpa_above(black_box(6.0))))
    });
}

criterion_group!(benches, bench_gpa);
criterion_main!(benches);
