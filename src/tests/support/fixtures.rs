use crate::profile::domain::entities::{
    Collection, CompletedTask, Contacts, DisplayValue, Performer, Profile, Testimonial, WorkSample,
};

pub fn work_sample(title: &str, created_at: i64) -> WorkSample {
    WorkSample {
        title: title.to_string(),
        description: format!("About {}", title),
        images: vec![format!("https://cdn.example.com/{}.png", created_at)],
        created_at,
    }
}

/// `Sample 1` .. `Sample n`, with `created_at` equal to the index.
pub fn work_samples(n: usize) -> Vec<WorkSample> {
    (1..=n)
        .map(|i| work_sample(&format!("Sample {}", i), i as i64))
        .collect()
}

pub fn testimonial(comment: Option<&str>, score: f64, created_at: i64) -> Testimonial {
    Testimonial {
        comment: comment.map(str::to_string),
        score,
        created_at,
    }
}

pub fn completed_task(title: &str, created_at: i64) -> CompletedTask {
    CompletedTask {
        title: title.to_string(),
        description: "Delivered on time".to_string(),
        skills: "Rust, Actix".to_string(),
        price: Some(DisplayValue::Number(serde_json::Number::from(15000))),
        created_at,
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        first_name: "Anna".to_string(),
        last_name: "Petrova".to_string(),
        avatar: Some("https://cdn.example.com/anna.png".to_string()),
        specialization: Some("Backend developer".to_string()),
        about: Some("I build web services and bots.".to_string()),
        experience: Some(DisplayValue::Number(serde_json::Number::from(7))),
        categories: vec!["Web".to_string(), "Bots".to_string()],
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string(), "Docker".to_string()],
        contacts: Some(Contacts {
            email: Some("anna@example.com".to_string()),
            phone: Some("+7 900 000-00-00".to_string()),
        }),
        performer: Performer {
            portfolio: Collection {
                total_count: 3,
                items: work_samples(3),
            },
            feedback: Collection {
                total_count: 17,
                items: vec![
                    testimonial(Some("Great work"), 5.0, 1_700_000_000),
                    testimonial(Some(""), 4.5, 1_690_000_000),
                    testimonial(None, 3.0, 1_680_000_000),
                ],
            },
            completed_tasks: Collection {
                total_count: 42,
                items: vec![
                    completed_task("Landing page", 1_650_000_000),
                    completed_task("Telegram bot", 1_660_000_000),
                ],
            },
        },
    }
}
