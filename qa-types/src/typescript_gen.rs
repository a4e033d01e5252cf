/// Names accepted by [`generate_typescript_definitions`], in output order
pub const API_TYPE_NAMES: &[&str] = &[
    "ApiRoot",
    "ErrorResponse",
    "FieldErrors",
    "QuestionListItem",
    "QuestionDetail",
    "QuestionListPage",
    "CreateQuestionRequest",
    "AnswerItem",
    "CreateAnswerRequest",
    "AnswerForm",
    "AnswerFormResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "ApiRoot" => ApiRoot::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "FieldErrors" => FieldErrors::export_to_string()?,

        "QuestionListItem" => QuestionListItem::export_to_string()?,
        "QuestionDetail" => QuestionDetail::export_to_string()?,
        "QuestionListPage" => QuestionListPage::export_to_string()?,
        "CreateQuestionRequest" => CreateQuestionRequest::export_to_string()?,

        "AnswerItem" => AnswerItem::export_to_string()?,
        "CreateAnswerRequest" => CreateAnswerRequest::export_to_string()?,
        "AnswerForm" => AnswerForm::export_to_string()?,
        "AnswerFormResponse" => AnswerFormResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in qa-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_type() {
        let result = generate_typescript_definitions(&["AnswerItem"]).unwrap();
        assert!(result.contains("AnswerItem"));
        assert!(result.contains("question_id: number"));
        assert!(result.contains("created_at: string"));
    }

    #[test]
    fn test_generate_multiple_types() {
        let result =
            generate_typescript_definitions(&["QuestionListItem", "QuestionDetail"]).unwrap();
        assert!(result.contains("QuestionListItem"));
        assert!(result.contains("answers_count: number"));
        assert!(result.contains("QuestionDetail"));
    }

    #[test]
    fn test_all_api_types_export() {
        let result = generate_typescript_definitions(API_TYPE_NAMES).unwrap();
        for name in API_TYPE_NAMES {
            assert!(result.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_type_error() {
        let result = generate_typescript_definitions(&["NonExistentType"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown type"));
    }

    #[test]
    fn test_empty_type_names() {
        let result = generate_typescript_definitions(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cleaned_output() {
        let result = generate_typescript_definitions(&["QuestionDetail"]).unwrap();
        assert!(!result.contains("import type"));
        assert!(!result.contains("This file was generated"));
    }
}
