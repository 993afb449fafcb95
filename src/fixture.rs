use clap::ValueEnum;
use ratatui::style::Color;

use crate::models::Note;

/// Anything that can hand the screen its notes.
pub trait NoteSource {
    fn notes(&self) -> Vec<Note>;
}

/// Built-in note sets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Fixture {
    /// A handful of sample cards.
    #[default]
    Sample,
    /// No cards at all.
    Empty,
}

impl NoteSource for Fixture {
    fn notes(&self) -> Vec<Note> {
        match self {
            Fixture::Sample => fake_notes(),
            Fixture::Empty => Vec::new(),
        }
    }
}

impl NoteSource for Vec<Note> {
    fn notes(&self) -> Vec<Note> {
        self.clone()
    }
}

/// The sample cards, always the same and always in the same order.
pub fn fake_notes() -> Vec<Note> {
    vec![
        Note::new(
            1,
            "Groceries",
            "Milk, eggs, a loaf of rye and whatever cheese is on sale.",
        )
        .with_accent(Color::Green),
        Note::new(
            2,
            "Call the plumber",
            "Kitchen tap still drips. Ask about Thursday morning.",
        )
        .with_accent(Color::Red),
        Note::new(
            3,
            "Book ideas",
            "A lighthouse keeper who logs every ship that never arrives.",
        ),
        Note::new(
            4,
            "Workout",
            "Monday legs, Wednesday back, Friday whatever hurts least.",
        )
        .with_accent(Color::Yellow),
        Note::new(
            5,
            "Meeting notes",
            "Ship the beta on the 14th. Docs owner still undecided.",
        )
        .with_accent(Color::Blue),
        Note::new(
            6,
            "Recipe: lentil soup",
            "Onion, carrot, celery, red lentils, cumin. Simmer 25 minutes.",
        ),
        Note::new(
            7,
            "Birthday gifts",
            "Mum: gardening gloves. Sam: the new puzzle game.",
        )
        .with_accent(Color::Magenta),
        Note::new(
            8,
            "Reading list",
            "The Dispossessed, Piranesi, A Psalm for the Wild-Built.",
        ),
        Note::new(
            9,
            "Car",
            "Tyre pressure light is on again. Check the rear left.",
        )
        .with_accent(Color::Cyan),
        Note::new(
            10,
            "Weekend",
            "Hike if it is dry, museum if it rains. Either way, pancakes.",
        ),
    ]
}
