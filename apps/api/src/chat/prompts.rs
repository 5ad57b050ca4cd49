//! Prompt assembly for the Sara advisor persona.

use crate::models::career::CareerInfo;
use crate::models::chat::ChatMessage;

/// Persona and guidance prepended to every Gemini call.
pub const BASE_CONTEXT: &str = r#"
Eres Sara, la asesora virtual de la Universidad Bolivariana del Ecuador. Tu estilo es profesional, cálido y detallado, brindando respuestas claras, precisas y acogedoras para que los usuarios se sientan escuchados y bien atendidos.

Tu misión:

Guiarlos con información relevante sobre carreras, beneficios y procesos de la universidad.

Destacar las ventajas de estudiar en la UBE:

Excelencia académica con profesores especializados.

Infraestructura moderna y ambientes de aprendizaje óptimos.

Oportunidades de prácticas y vinculación laboral.

Formación integral con valores sociales y compromiso comunitario.

Cuando pregunten por carreras:

Proporciona un listado organizado (por áreas o facultades).

Pregunta amablemente: "¿Te gustaría más detalles sobre alguna carrera en particular? Estoy aquí para ayudarte".

Recuerda:

Usa emojis para dar calidez y dinamismo (pero sin exceso).

Evita presentarte a menos que sea necesario (ya conocen tu nombre y rol).

Siempre agradece y motiva a seguir explorando la UBE.
Recuerda siempre basarte en información de Ecuador.
Y finalmente comenta los beneficios de la UBE.
"#;

/// Builds the full prompt: persona, recent history, the program data block
/// when available, and the user's turn.
///
/// `history` arrives newest first (as fetched from SQL) and is replayed
/// chronologically.
pub fn generate_prompt(
    user_message: &str,
    career: Option<&CareerInfo>,
    history: &[ChatMessage],
) -> String {
    let mut prompt = String::from(BASE_CONTEXT);

    if !history.is_empty() {
        prompt.push_str("\n\nHistorial reciente de la conversación:\n");
        for message in history.iter().rev() {
            let role = if message.role == "user" {
                "Usuario"
            } else {
                "Sara"
            };
            prompt.push_str(&format!("{role}: {}\n", message.content));
        }
    }

    if let Some(info) = career {
        prompt.push_str("\n\n");
        prompt.push_str(&career_block(info));
    }

    prompt.push_str(&format!("\n\nUsuario: {user_message}\nSara:"));
    prompt
}

/// The program information block: details, costs, profile, schedules and
/// downloadable documents.
fn career_block(info: &CareerInfo) -> String {
    let row = &info.row;

    let mut horarios_info = String::new();
    if !info.horarios.is_empty() {
        horarios_info.push_str("\n\nHorarios disponibles:\n");
        for schedule in &info.horarios {
            horarios_info.push_str(&format!(
                "- {}: {} de {}\n",
                schedule.nivel, schedule.dias, schedule.horario
            ));
        }
    }

    let mut documentos_info = String::new();
    if !info.documentos.is_empty() {
        let nombres: Vec<&str> = info
            .documentos
            .iter()
            .map(|doc| doc.nombre.as_deref().unwrap_or("documento"))
            .collect();
        documentos_info = format!(
            "\n\nDocumentos disponibles: {}. Puedes hacer clic para descargarlos.",
            nombres.join(", ")
        );
    }

    let semestres = row
        .semestres
        .map(|s| s.to_string())
        .unwrap_or_default();

    format!(
        "Información de la carrera {}:\n\
         - Modalidad: {}\n\
         - Duración: {} semestres\n\
         - Costos:\n  \
         * Inscripción: ${}\n  \
         * PRE: ${}\n  \
         * Matrícula: ${}\n  \
         * Cuotas mensuales: ${}\n\
         - Perfil profesional: {}{}{}",
        row.nombre,
        row.modalidad.as_deref().unwrap_or(""),
        semestres,
        row.inscripcion.as_deref().unwrap_or(""),
        row.pre.as_deref().unwrap_or(""),
        row.matricula.as_deref().unwrap_or(""),
        row.cuotas_mensuales.as_deref().unwrap_or(""),
        row.descripcion.as_deref().unwrap_or(""),
        horarios_info,
        documentos_info,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{CareerRow, DocumentSummary};
    use crate::resolver::LevelSchedule;
    use chrono::Utc;

    fn message(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
            carrera_referencia: None,
        }
    }

    fn sample_info() -> CareerInfo {
        CareerInfo {
            row: CareerRow {
                id_carrera: 1,
                nombre: "Derecho".to_string(),
                modalidad: Some("Presencial".to_string()),
                semestres: Some(8),
                inscripcion: Some("80".to_string()),
                pre: Some("150".to_string()),
                matricula: Some("120".to_string()),
                cuotas_mensuales: Some("95".to_string()),
                descripcion: Some("Forma juristas íntegros.".to_string()),
            },
            documentos: vec![DocumentSummary {
                id: 7,
                nombre: Some("malla_derecho".to_string()),
                fecha_upload: Utc::now(),
            }],
            horarios: vec![LevelSchedule {
                nivel: "Matutino".to_string(),
                dias: "Lunes a Viernes".to_string(),
                horario: "07:00 a 13:00".to_string(),
            }],
        }
    }

    #[test]
    fn test_prompt_without_career_has_persona_and_user_turn() {
        let prompt = generate_prompt("hola", None, &[]);
        assert!(prompt.contains("Eres Sara"));
        assert!(prompt.contains("Usuario: hola"));
        assert!(prompt.ends_with("Sara:"));
        assert!(!prompt.contains("Información de la carrera"));
    }

    #[test]
    fn test_history_is_replayed_oldest_first() {
        // newest first, as returned from SQL
        let history = vec![
            message("assistant", "¡Hola! ¿En qué te ayudo?"),
            message("user", "hola"),
        ];
        let prompt = generate_prompt("cuéntame de derecho", None, &history);
        let user_turn = prompt.find("Usuario: hola").unwrap();
        let assistant_turn = prompt.find("Sara: ¡Hola!").unwrap();
        assert!(user_turn < assistant_turn);
    }

    #[test]
    fn test_empty_history_adds_no_history_section() {
        let prompt = generate_prompt("hola", None, &[]);
        assert!(!prompt.contains("Historial reciente"));
    }

    #[test]
    fn test_career_block_lists_costs_schedules_and_documents() {
        let prompt = generate_prompt("info de derecho", Some(&sample_info()), &[]);
        assert!(prompt.contains("Información de la carrera Derecho"));
        assert!(prompt.contains("* Inscripción: $80"));
        assert!(prompt.contains("- Duración: 8 semestres"));
        assert!(prompt.contains("Horarios disponibles:"));
        assert!(prompt.contains("- Matutino: Lunes a Viernes de 07:00 a 13:00"));
        assert!(prompt.contains("Documentos disponibles: malla_derecho"));
    }

    #[test]
    fn test_career_block_omits_empty_sections() {
        let mut info = sample_info();
        info.documentos.clear();
        info.horarios.clear();
        let prompt = generate_prompt("info", Some(&info), &[]);
        assert!(!prompt.contains("Horarios disponibles"));
        assert!(!prompt.contains("Documentos disponibles"));
    }
}
