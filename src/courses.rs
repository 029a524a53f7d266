//! Static course catalog behind the carousel
//!
//! Five physics courses with five lessons each, consumed read-only by
//! the lessons modal. Also hosts the modal markup builder and the
//! progress-ring arithmetic, both pure so they test without a DOM.

use std::f64::consts::TAU;

/// Completion state of a single lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Completed,
    Current,
    Pending,
}

impl LessonStatus {
    /// CSS class used on lesson cards and status badges
    pub fn class(self) -> &'static str {
        match self {
            LessonStatus::Completed => "completed",
            LessonStatus::Current => "current",
            LessonStatus::Pending => "pending",
        }
    }

    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            LessonStatus::Completed => "Completed",
            LessonStatus::Current => "In progress",
            LessonStatus::Pending => "Not started",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: &'static str,
    /// Nominal duration in minutes
    pub minutes: u32,
    pub status: LessonStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub lessons: [Lesson; 5],
}

use LessonStatus::{Completed, Current, Pending};

pub const COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "Physics Fundamentals",
        lessons: [
            Lesson { id: 1, title: "Introduction to Physics", minutes: 15, status: Completed },
            Lesson { id: 2, title: "Measurement and Units", minutes: 20, status: Completed },
            Lesson { id: 3, title: "Physical Quantities", minutes: 25, status: Current },
            Lesson { id: 4, title: "Dimensional Analysis", minutes: 30, status: Pending },
            Lesson { id: 5, title: "Assessment Test", minutes: 15, status: Pending },
        ],
    },
    Course {
        id: 2,
        title: "Linear Motion",
        lessons: [
            Lesson { id: 1, title: "Introduction to Motion", minutes: 20, status: Completed },
            Lesson { id: 2, title: "Average Velocity", minutes: 25, status: Completed },
            Lesson { id: 3, title: "Instantaneous Velocity", minutes: 30, status: Current },
            Lesson { id: 4, title: "Acceleration", minutes: 35, status: Pending },
            Lesson { id: 5, title: "Projectile Motion", minutes: 40, status: Pending },
        ],
    },
    Course {
        id: 3,
        title: "Forces and Motion",
        lessons: [
            Lesson { id: 1, title: "Introduction to Dynamics", minutes: 20, status: Pending },
            Lesson { id: 2, title: "Newton's First Law", minutes: 25, status: Pending },
            Lesson { id: 3, title: "Newton's Second Law", minutes: 30, status: Pending },
            Lesson { id: 4, title: "Newton's Third Law", minutes: 25, status: Pending },
            Lesson { id: 5, title: "Practical Applications", minutes: 35, status: Pending },
        ],
    },
    Course {
        id: 4,
        title: "Electricity and Magnetism",
        lessons: [
            Lesson { id: 1, title: "Electric Charge", minutes: 20, status: Completed },
            Lesson { id: 2, title: "The Electric Field", minutes: 25, status: Completed },
            Lesson { id: 3, title: "Ohm's Law", minutes: 30, status: Current },
            Lesson { id: 4, title: "Electric Circuits", minutes: 35, status: Pending },
            Lesson { id: 5, title: "Magnetism", minutes: 40, status: Pending },
        ],
    },
    Course {
        id: 5,
        title: "Modern Physics",
        lessons: [
            Lesson { id: 1, title: "Special Relativity", minutes: 30, status: Completed },
            Lesson { id: 2, title: "Waves and Particles", minutes: 35, status: Completed },
            Lesson { id: 3, title: "The Uncertainty Principle", minutes: 25, status: Current },
            Lesson { id: 4, title: "The Schrodinger Equation", minutes: 40, status: Pending },
            Lesson { id: 5, title: "Modern Applications", minutes: 45, status: Pending },
        ],
    },
];

/// Look up a course by id, falling back to the first course for
/// unknown ids
pub fn course_by_id(id: u32) -> &'static Course {
    COURSES.iter().find(|c| c.id == id).unwrap_or(&COURSES[0])
}

/// Modal body markup for a course's lesson list
pub fn lessons_html(course: &Course) -> String {
    let mut html = format!(
        concat!(
            "<div class=\"course-info\">",
            "<h4 class=\"course-name\">{}</h4>",
            "<p class=\"total-lessons\">{} lessons</p>",
            "</div>",
            "<div class=\"lessons-container\">"
        ),
        course.title,
        course.lessons.len(),
    );

    for (i, lesson) in course.lessons.iter().enumerate() {
        let status = lesson.status.class();
        html.push_str(&format!(
            concat!(
                "<div class=\"lesson-card {status}\" data-lesson-id=\"{id}\">",
                "<div class=\"lesson-number\">{number}</div>",
                "<div class=\"lesson-content\">",
                "<h5 class=\"lesson-title\">{title}</h5>",
                "<div class=\"lesson-meta\">",
                "<span class=\"lesson-duration\">{minutes} min</span>",
                "<span class=\"lesson-status-badge {status}\">{label}</span>",
                "</div>",
                "</div>",
                "<button class=\"lesson-play-btn\" data-lesson-id=\"{id}\" aria-label=\"Play lesson\">",
                "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\">",
                "<path d=\"M8 5V19L19 12L8 5Z\" fill=\"currentColor\"/>",
                "</svg>",
                "</button>",
                "</div>"
            ),
            status = status,
            id = lesson.id,
            number = i + 1,
            title = lesson.title,
            minutes = lesson.minutes,
            label = lesson.status.label(),
        ));
    }

    html.push_str("</div>");
    html
}

/// Radius of the card progress ring (px)
pub const PROGRESS_RING_RADIUS: f64 = 24.0;

/// SVG stroke values for a progress ring at `percent` completion
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRing {
    pub dasharray: String,
    pub dashoffset: f64,
}

pub fn progress_ring(percent: f64) -> ProgressRing {
    let circumference = TAU * PROGRESS_RING_RADIUS;
    ProgressRing {
        dasharray: format!("{circumference} {circumference}"),
        dashoffset: circumference - (percent / 100.0) * circumference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(COURSES.len(), 5);
        for (i, course) in COURSES.iter().enumerate() {
            assert_eq!(course.id, i as u32 + 1);
            for (j, lesson) in course.lessons.iter().enumerate() {
                assert_eq!(lesson.id, j as u32 + 1);
                assert!(lesson.minutes > 0);
            }
        }
    }

    #[test]
    fn test_course_lookup_falls_back_to_first() {
        assert_eq!(course_by_id(4).title, "Electricity and Magnetism");
        assert_eq!(course_by_id(0).id, 1);
        assert_eq!(course_by_id(999).id, 1);
    }

    #[test]
    fn test_lessons_html_one_card_per_lesson() {
        let course = course_by_id(1);
        let html = lessons_html(course);

        assert!(html.contains("<h4 class=\"course-name\">Physics Fundamentals</h4>"));
        assert!(html.contains("5 lessons"));
        assert_eq!(html.matches("lesson-card").count(), 5);
        assert_eq!(html.matches("lesson-play-btn").count(), 5);
        for n in 1..=5 {
            assert!(html.contains(&format!("data-lesson-id=\"{n}\"")));
        }
    }

    #[test]
    fn test_lessons_html_carries_status_classes() {
        let html = lessons_html(course_by_id(1));
        assert_eq!(html.matches("lesson-card completed").count(), 2);
        assert_eq!(html.matches("lesson-card current").count(), 1);
        assert_eq!(html.matches("lesson-card pending").count(), 2);
        assert!(html.contains("lesson-status-badge current\">In progress"));
    }

    #[test]
    fn test_progress_ring_endpoints() {
        let circumference = TAU * PROGRESS_RING_RADIUS;

        let empty = progress_ring(0.0);
        assert!((empty.dashoffset - circumference).abs() < 1e-9);

        let full = progress_ring(100.0);
        assert!(full.dashoffset.abs() < 1e-9);

        let half = progress_ring(50.0);
        assert!((half.dashoffset - circumference / 2.0).abs() < 1e-9);
        assert_eq!(half.dasharray, format!("{circumference} {circumference}"));
    }
}
