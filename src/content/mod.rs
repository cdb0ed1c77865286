macro_rules! shaped_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::content::Shaped for $ty {
            fn shape(&self) -> $crate::content::Shape {
                $crate::content::Shape::Record(vec![
                    $((stringify!($field), $crate::content::Shaped::shape(&self.$field)),)*
                ])
            }
        }
    };
}

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod profile;
pub mod projects;
pub mod skills;

use crate::i18n::{Bilingual, Language};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Text { blank: bool },
    Number,
    Id(&'static str),
    Optional(Option<Box<Shape>>),
    List(Vec<Shape>),
    Record(Vec<(&'static str, Shape)>),
}

pub trait Shaped {
    fn shape(&self) -> Shape;
}

impl Shaped for &'static str {
    fn shape(&self) -> Shape {
        Shape::Text {
            blank: self.trim().is_empty(),
        }
    }
}

impl Shaped for u8 {
    fn shape(&self) -> Shape {
        Shape::Number
    }
}

impl Shaped for bool {
    fn shape(&self) -> Shape {
        Shape::Number
    }
}

impl<T: Shaped> Shaped for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Optional(self.as_ref().map(|value| Box::new(value.shape())))
    }
}

impl<T: Shaped> Shaped for &'static [T] {
    fn shape(&self) -> Shape {
        Shape::List(self.iter().map(|item| item.shape()).collect())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParityError {
    #[error("{section}: `{path}` differs in shape between languages ({detail})")]
    ShapeMismatch {
        section: &'static str,
        path: String,
        detail: String,
    },
    #[error("{section}: `{path}` is blank in `{language}` only")]
    BlankTranslation {
        section: &'static str,
        path: String,
        language: &'static str,
    },
}

impl<T: Shaped> Bilingual<T> {
    pub fn check_parity(&self, section: &'static str) -> Result<(), ParityError> {
        compare(section, String::new(), &self.en.shape(), &self.fa.shape())
    }
}

fn compare(section: &'static str, path: String, en: &Shape, fa: &Shape) -> Result<(), ParityError> {
    let mismatch = |detail: String| ParityError::ShapeMismatch {
        section,
        path: display_path(&path),
        detail,
    };

    match (en, fa) {
        (Shape::Text { blank: en_blank }, Shape::Text { blank: fa_blank }) => {
            match (en_blank, fa_blank) {
                (true, false) => Err(ParityError::BlankTranslation {
                    section,
                    path: display_path(&path),
                    language: Language::En.as_str(),
                }),
                (false, true) => Err(ParityError::BlankTranslation {
                    section,
                    path: display_path(&path),
                    language: Language::Fa.as_str(),
                }),
                _ => Ok(()),
            }
        }
        (Shape::Number, Shape::Number) => Ok(()),
        (Shape::Id(en), Shape::Id(fa)) if en == fa => Ok(()),
        (Shape::Id(en), Shape::Id(fa)) => Err(mismatch(format!("`{en}` vs `{fa}`"))),
        (Shape::Optional(en), Shape::Optional(fa)) => match (en, fa) {
            (Some(en), Some(fa)) => compare(section, path.clone(), en, fa),
            (None, None) => Ok(()),
            _ => Err(mismatch("present in one language only".to_string())),
        },
        (Shape::List(en), Shape::List(fa)) => {
            if en.len() != fa.len() {
                return Err(mismatch(format!("{} items vs {} items", en.len(), fa.len())));
            }
            for (index, (en, fa)) in en.iter().zip(fa).enumerate() {
                compare(section, format!("{path}[{index}]"), en, fa)?;
            }
            Ok(())
        }
        (Shape::Record(en), Shape::Record(fa)) => {
            let en_keys: Vec<_> = en.iter().map(|(key, _)| *key).collect();
            let fa_keys: Vec<_> = fa.iter().map(|(key, _)| *key).collect();
            if en_keys != fa_keys {
                return Err(mismatch(format!("fields {en_keys:?} vs {fa_keys:?}")));
            }
            for ((key, en), (_, fa)) in en.iter().zip(fa) {
                let child = if path.is_empty() {
                    (*key).to_string()
                } else {
                    format!("{path}.{key}")
                };
                compare(section, child, en, fa)?;
            }
            Ok(())
        }
        _ => Err(mismatch("different kinds".to_string())),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

pub fn verify_all() -> Result<(), ParityError> {
    header::NAV.check_parity("header")?;
    hero::HERO.check_parity("hero")?;
    about::ABOUT.check_parity("about")?;
    education::EDUCATION.check_parity("education")?;
    experience::EXPERIENCE.check_parity("experience")?;
    skills::SKILLS.check_parity("skills")?;
    projects::PROJECTS.check_parity("projects")?;
    contact::CONTACT.check_parity("contact")?;
    footer::FOOTER.check_parity("footer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Card {
        title: &'static str,
        items: &'static [&'static str],
    }

    shaped_record!(Card { title, items });

    #[test]
    fn every_section_has_matching_shape_in_both_languages() {
        assert_eq!(verify_all(), Ok(()));
    }

    #[test]
    fn list_length_mismatch_is_reported_with_path() {
        let table = Bilingual::new(
            Card { title: "Interests", items: &["IaC", "CI/CD"] },
            Card { title: "علایق", items: &["IaC"] },
        );

        let error = table.check_parity("about").expect_err("lengths differ");
        assert!(matches!(
            error,
            ParityError::ShapeMismatch { ref path, .. } if path == "items"
        ));
    }

    #[test]
    fn blank_translation_is_reported_for_the_blank_language() {
        let table = Bilingual::new(
            Card { title: "Interests", items: &["IaC"] },
            Card { title: "  ", items: &["IaC"] },
        );

        assert_eq!(
            table.check_parity("about"),
            Err(ParityError::BlankTranslation {
                section: "about",
                path: "title".to_string(),
                language: "fa",
            })
        );
    }
}
