use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourseError {
    #[error("Veuillez remplir les champs Domaine, Compétence et Sujet.")]
    MissingRequiredFields,
}
