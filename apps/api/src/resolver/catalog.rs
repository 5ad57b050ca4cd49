//! Static career tables: the canonical catalog, the synonym and variation
//! tables that drive resolution, and the schedule table. All read-only,
//! built once at startup.

use std::collections::HashMap;

use serde::Serialize;

/// One schedule block for a level of a program.
#[derive(Debug, Clone, Serialize)]
pub struct LevelSchedule {
    pub nivel: String,
    pub dias: String,
    pub horario: String,
}

/// The fixed catalog of academic programs with its lookup tables.
///
/// The synonym and variation tables are ordered vectors, not hash maps:
/// resolution is first-substring-match-wins, so iteration order is part of
/// the observable behavior.
pub struct CareerCatalog {
    /// Display names shown to users (catalog listings, registration form).
    careers: Vec<String>,
    /// Informal single term → canonical program name. Many-to-one.
    pub(crate) synonyms: Vec<(String, String)>,
    /// Canonical program name → alternate phrasings that also resolve to
    /// it. Some canonical names repeat inside their own list; the
    /// redundancy is intentional and keeps evaluation order stable.
    pub(crate) variations: Vec<(String, Vec<String>)>,
    /// Uppercased display name → per-level day/time blocks.
    schedules: HashMap<String, Vec<LevelSchedule>>,
}

impl CareerCatalog {
    pub fn builtin() -> Self {
        Self {
            careers: [
                "Derecho",
                "Ingeniería Eléctrica",
                "Ingeniería en Sistemas Inteligentes",
                "Ingeniería en Biomedicina",
                "Licenciatura en Administración de Empresas",
                "Licenciatura en Auditoría y Control de Gestión",
                "Licenciatura en Ciencias de la Educación",
                "Licenciatura en Contabilidad y Finanzas",
                "Licenciatura en Enfermería",
                "Licenciatura en Fisioterapia",
                "Licenciatura en Psicología",
                "Licenciatura en Seguridad y Salud Ocupacional",
                "Odontología",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            synonyms: synonym_table(),
            variations: variation_table(),
            schedules: schedule_table(),
        }
    }

    pub fn careers(&self) -> &[String] {
        &self.careers
    }

    /// Bulleted catalog listing used in canned chat responses. The caller
    /// supplies the leading "- " of the first item.
    pub fn formatted_careers(&self) -> String {
        self.careers.join("\n- ")
    }

    /// Schedule blocks for a program by display name; empty when none are
    /// published. Keys are uppercased with accents preserved.
    pub fn schedule_for(&self, nombre: &str) -> &[LevelSchedule] {
        self.schedules
            .get(&nombre.to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn synonym_table() -> Vec<(String, String)> {
    [
        ("sistemas", "ingeniería en sistemas inteligentes"),
        ("computación", "ingeniería en sistemas inteligentes"),
        ("informática", "ingeniería en sistemas inteligentes"),
        ("abogacía", "derecho"),
        ("dentista", "odontología"),
        ("contador", "licenciatura en contabilidad y finanzas"),
        ("contaduría", "licenciatura en contabilidad y finanzas"),
        ("pedagogía", "licenciatura en ciencias de la educación"),
        ("enfermero", "licenciatura en enfermería"),
        ("psicólogo", "licenciatura en psicología"),
        ("fisio", "licenciatura en fisioterapia"),
        (
            "seguridad industrial",
            "licenciatura en seguridad y salud ocupacional",
        ),
    ]
    .into_iter()
    .map(|(synonym, career)| (synonym.to_string(), career.to_string()))
    .collect()
}

fn variation_table() -> Vec<(String, Vec<String>)> {
    [
        ("derecho", &["derecho", "abogado", "leyes", "abogacía"][..]),
        (
            "ingeniería eléctrica",
            &[
                "eléctrica",
                "electricidad",
                "ingenieria electrica",
                "ingeniería elect",
            ][..],
        ),
        (
            "ingeniería en sistemas inteligentes",
            &[
                "sistema",
                "ingeniería en sistemas inteligentes",
                "sistemas",
                "sistemas inteligentes",
                "ingeniería sistemas",
                "sistemas computacionales",
                "sistemas computarizados",
                "sistemas info",
                "sistemas intel",
                "computación",
                "informática",
            ][..],
        ),
        (
            "ingeniería en biomedicina",
            &[
                "biomedicina",
                "bio médica",
                "ingeniería bioméd",
                "medicina tecnológica",
            ][..],
        ),
        (
            "licenciatura en administración de empresas",
            &[
                "administración",
                "empresas",
                "administracion de empresas",
                "negocios",
            ][..],
        ),
        (
            "licenciatura en auditoría y control de gestión",
            &[
                "auditoría",
                "auditoria",
                "control gestión",
                "control de gestion",
                "auditoría y control",
                "contraloría",
            ][..],
        ),
        (
            "licenciatura en ciencias de la educación",
            &[
                "ciencias educación",
                "pedagogía",
                "pedagogia",
                "formación docente",
                "educación",
                "docencia",
            ][..],
        ),
        (
            "licenciatura en contabilidad y finanzas",
            &[
                "contabilidad",
                "finanzas",
                "contaduría",
                "contaduria",
                "contable",
                "contador",
            ][..],
        ),
        (
            "licenciatura en enfermería",
            &[
                "enfermería",
                "enfermeria",
                "enfermero",
                "enfermera",
                "cuidados médicos",
                "enfermer",
            ][..],
        ),
        (
            "licenciatura en fisioterapia",
            &[
                "fisioterapia",
                "fisio",
                "rehabilitación física",
                "rehabilitacion fisica",
                "terapia física",
                "kinesiología",
            ][..],
        ),
        (
            "licenciatura en psicología",
            &[
                "psicología",
                "psicologia",
                "psicólogo",
                "psicologo",
                "psico",
                "terapia psicológica",
            ][..],
        ),
        (
            "licenciatura en seguridad y salud ocupacional",
            &[
                "seguridad ocupacional",
                "salud ocupacional",
                "seguridad laboral",
                "riesgos laborales",
                "prevención riesgos",
                "prevencion riesgos",
                "seguridad industrial",
            ][..],
        ),
        (
            "odontología",
            &["odontologia", "dental", "dentista", "odontólogo"][..],
        ),
    ]
    .into_iter()
    .map(|(career, variations)| {
        (
            career.to_string(),
            variations.iter().map(|v| v.to_string()).collect(),
        )
    })
    .collect()
}

fn schedule_table() -> HashMap<String, Vec<LevelSchedule>> {
    [
        (
            "DERECHO",
            &[
                ("Matutino", "Lunes a Viernes", "07:00 a 13:00"),
                ("Nocturno", "Lunes a Viernes", "18:00 a 22:00"),
            ][..],
        ),
        (
            "INGENIERÍA ELÉCTRICA",
            &[("Matutino", "Lunes a Viernes", "07:00 a 13:00")][..],
        ),
        (
            "INGENIERÍA EN SISTEMAS INTELIGENTES",
            &[
                ("Matutino", "Lunes a Viernes", "07:00 a 13:00"),
                ("En línea", "Sábados", "08:00 a 12:00"),
            ][..],
        ),
        (
            "INGENIERÍA EN BIOMEDICINA",
            &[("Matutino", "Lunes a Viernes", "07:00 a 13:00")][..],
        ),
        (
            "LICENCIATURA EN ADMINISTRACIÓN DE EMPRESAS",
            &[
                ("Vespertino", "Lunes a Viernes", "13:00 a 18:00"),
                ("En línea", "Sábados", "08:00 a 12:00"),
            ][..],
        ),
        (
            "LICENCIATURA EN AUDITORÍA Y CONTROL DE GESTIÓN",
            &[("Nocturno", "Lunes a Viernes", "18:00 a 22:00")][..],
        ),
        (
            "LICENCIATURA EN CIENCIAS DE LA EDUCACIÓN",
            &[
                ("Vespertino", "Lunes a Viernes", "13:00 a 18:00"),
                ("En línea", "Sábados", "08:00 a 12:00"),
            ][..],
        ),
        (
            "LICENCIATURA EN CONTABILIDAD Y FINANZAS",
            &[
                ("Matutino", "Lunes a Viernes", "07:00 a 13:00"),
                ("Nocturno", "Lunes a Viernes", "18:00 a 22:00"),
            ][..],
        ),
        (
            "LICENCIATURA EN ENFERMERÍA",
            &[
                ("Matutino", "Lunes a Viernes", "07:00 a 13:00"),
                ("Vespertino", "Lunes a Viernes", "13:00 a 18:00"),
            ][..],
        ),
        (
            "LICENCIATURA EN FISIOTERAPIA",
            &[("Matutino", "Lunes a Viernes", "07:00 a 13:00")][..],
        ),
        (
            "LICENCIATURA EN PSICOLOGÍA",
            &[
                ("Matutino", "Lunes a Viernes", "07:00 a 13:00"),
                ("Nocturno", "Lunes a Viernes", "18:00 a 22:00"),
            ][..],
        ),
        (
            "LICENCIATURA EN SEGURIDAD Y SALUD OCUPACIONAL",
            &[("Nocturno", "Lunes a Viernes", "18:00 a 22:00")][..],
        ),
        (
            "ODONTOLOGÍA",
            &[("Matutino", "Lunes a Viernes", "07:00 a 14:00")][..],
        ),
    ]
    .into_iter()
    .map(|(career, levels)| {
        (
            career.to_string(),
            levels
                .iter()
                .map(|(nivel, dias, horario)| LevelSchedule {
                    nivel: nivel.to_string(),
                    dias: dias.to_string(),
                    horario: horario.to_string(),
                })
                .collect(),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_thirteen_careers() {
        assert_eq!(CareerCatalog::builtin().careers().len(), 13);
    }

    #[test]
    fn test_every_synonym_maps_into_the_variation_table() {
        let catalog = CareerCatalog::builtin();
        for (synonym, target) in &catalog.synonyms {
            assert!(
                catalog.variations.iter().any(|(career, _)| career == target),
                "synonym '{synonym}' maps to '{target}', which is not a variation-table key"
            );
        }
    }

    #[test]
    fn test_variation_keys_are_lowercased_display_names() {
        let catalog = CareerCatalog::builtin();
        assert_eq!(catalog.careers().len(), catalog.variations.len());
        for career in catalog.careers() {
            assert!(
                catalog
                    .variations
                    .iter()
                    .any(|(key, _)| *key == career.to_lowercase()),
                "display name '{career}' has no variation entry"
            );
        }
    }

    #[test]
    fn test_schedule_lookup_uppercases_display_names() {
        let catalog = CareerCatalog::builtin();
        assert!(!catalog.schedule_for("Derecho").is_empty());
        assert!(!catalog
            .schedule_for("Ingeniería en Sistemas Inteligentes")
            .is_empty());
        assert!(catalog.schedule_for("astronomía").is_empty());
    }

    #[test]
    fn test_every_career_has_a_schedule() {
        let catalog = CareerCatalog::builtin();
        for career in catalog.careers() {
            assert!(
                !catalog.schedule_for(career).is_empty(),
                "'{career}' has no schedule entry"
            );
        }
    }

    #[test]
    fn test_formatted_careers_is_newline_bulleted() {
        let listing = CareerCatalog::builtin().formatted_careers();
        assert!(listing.starts_with("Derecho"));
        assert!(listing.contains("\n- Odontología"));
    }
}
