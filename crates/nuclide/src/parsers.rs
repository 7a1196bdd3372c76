//! Parser combinators for isotope identifier strings
//!
//! Accepts the grammar `EE[-]AAA[m[M]]` or `AAA[m[M]][-]EE`, where `EE` is
//! an element symbol or name (case-insensitive), `AAA` the mass number, and
//! an optional `m` marks a metastable state with optional level digits.
//!
//! The hyphen is optional and token order is auto-detected, so `"232TH"`,
//! `"U-238"`, `"Tc-99m"`, and `"178M2HF"` are all unambiguous.

// internal modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::isotope::IsomerState;

// nom parser combinators
use nom::character::complete::one_of;
use nom::combinator::opt;
use nom::IResult;

/// Parse an identifier string into its element, mass number, and isomer state
///
/// ```rust
/// # use radtools_nuclide::{parse_isotope, IsomerState};
/// let (element, a, state) = parse_isotope("178M2HF").unwrap();
/// assert_eq!(element.symbol(), "Hf");
/// assert_eq!(a, 178);
/// assert_eq!(state, IsomerState::Excited(2));
/// ```
pub fn parse_isotope(text: &str) -> Result<(Element, u32, IsomerState)> {
    let (element, mass_isomer) = split_element_mass(text)?;
    let (a, state) = split_mass_isomer(mass_isomer)?;
    Ok((element, a, state))
}

/// Split the identifier into a resolved element and the mass+isomer token
///
/// Hyphenated identifiers must be exactly two tokens, one purely alphabetic
/// and the other leading with a digit. Without a hyphen, every split of the
/// string is tried in both orderings and the longest alphabetic run that
/// resolves to a known element wins. Ties go to the leftmost candidate.
fn split_element_mass(text: &str) -> Result<(Element, &str)> {
    if text.contains('-') {
        let tokens: Vec<&str> = text.split('-').collect();
        if tokens.len() != 2 {
            return Err(Error::MalformedHyphenation {
                text: text.to_string(),
            });
        }
        let (id, mass) = if is_alphabetic_run(tokens[0]) && leads_with_digit(tokens[1]) {
            (tokens[0], tokens[1])
        } else if leads_with_digit(tokens[0]) && is_alphabetic_run(tokens[1]) {
            (tokens[1], tokens[0])
        } else {
            return Err(Error::UnresolvedIdentifier {
                text: text.to_string(),
            });
        };
        Ok((Element::from_id(id)?, mass))
    } else {
        // Shorter substrings of a valid symbol or name can spuriously also
        // resolve, so every candidate is scored and the longest match wins
        let mut best: Option<(Element, &str, usize)> = None;
        for (split, _) in text.char_indices().skip(1) {
            let (head, tail) = text.split_at(split);
            for (id, mass) in [(head, tail), (tail, head)] {
                if !is_alphabetic_run(id) || !leads_with_digit(mass) {
                    continue;
                }
                let Ok(element) = Element::from_id(id) else {
                    continue;
                };
                match best {
                    Some((_, _, len)) if len >= id.len() => {}
                    _ => best = Some((element, mass, id.len())),
                }
            }
        }
        let (element, mass, _) = best.ok_or_else(|| Error::UnresolvedIdentifier {
            text: text.to_string(),
        })?;
        Ok((element, mass))
    }
}

/// Split the mass+isomer token into a mass number and isomer state
///
/// A case-insensitive `m` marks the isomer boundary. At most one is allowed,
/// the prefix must be an integer, and any suffix must be all digits.
fn split_mass_isomer(text: &str) -> Result<(u32, IsomerState)> {
    let markers = text
        .chars()
        .filter(|c| c.eq_ignore_ascii_case(&'m'))
        .count();
    if markers > 1 {
        return Err(Error::MultipleIsomerMarkers {
            text: text.to_string(),
        });
    }

    match mass_isomer(text) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((_, _)) if markers > 0 => Err(Error::MalformedIsomerLevel {
            text: text.to_string(),
        }),
        _ => Err(Error::MalformedMassNumber {
            text: text.to_string(),
        }),
    }
}

/// Mass number with an optional trailing isomer tag, e.g. 99, 99m, 178m2
fn mass_isomer(i: &str) -> IResult<&str, (u32, IsomerState)> {
    let (i, a) = nom::character::complete::u32(i)?;
    let (i, state) = opt(numbered_isomer)(i)?;
    Ok((i, (a, state.unwrap_or(IsomerState::Ground))))
}

/// Isomer tag in the usual formats m, m1, m2, etc...
fn numbered_isomer(i: &str) -> IResult<&str, IsomerState> {
    let (i, _) = one_of("mM")(i)?;
    let (i, level) = opt(nom::character::complete::u32)(i)?;

    Ok((i, IsomerState::from_level(level.unwrap_or(1))))
}

fn is_alphabetic_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn leads_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}
