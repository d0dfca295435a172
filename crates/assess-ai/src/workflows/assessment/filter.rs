use super::catalog::CatalogContext;
use super::domain::Section;
use super::service::AssessmentError;

/// Restrict the section catalog to what a persona may see.
///
/// Admin personas bypass filtering entirely. An access entry without a
/// sub-persona grants the whole persona; an entry naming a sub-persona only
/// matches requests carrying that sub-persona.
pub(crate) fn sections_for_persona<'a>(
    catalog: &'a CatalogContext,
    persona_id: &str,
    sub_persona_id: Option<&str>,
) -> Result<Vec<&'a Section>, AssessmentError> {
    let persona =
        catalog
            .persona(persona_id)
            .ok_or_else(|| AssessmentError::PersonaNotFound {
                persona_id: persona_id.to_string(),
                known: catalog.persona_ids(),
            })?;

    if let Some(sub_id) = sub_persona_id {
        if persona.sub_persona(sub_id).is_none() {
            return Err(AssessmentError::SubPersonaNotFound {
                persona_id: persona.id.clone(),
                sub_persona_id: sub_id.to_string(),
                valid: persona.sub_persona_ids(),
            });
        }
    }

    if persona.is_admin {
        return Ok(catalog.sections().iter().collect());
    }

    let sections = catalog
        .sections()
        .iter()
        .filter(|section| {
            section.persona_access.iter().any(|access| {
                access.persona_id == persona.id
                    && match (access.sub_persona_id.as_deref(), sub_persona_id) {
                        (None, _) => true,
                        (Some(granted), Some(requested)) => granted == requested,
                        (Some(_), None) => false,
                    }
            })
        })
        .collect();

    Ok(sections)
}
