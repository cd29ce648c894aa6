// Types generated from the .slint sources
pub use crate::{
    EducationCard, HighlightEntry, LinkEntry, ProjectCard, PublicationCard, StatusLevel,
    StatusMessage, TalkCard, TeachingCard,
};
