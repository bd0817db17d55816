//! Contract Tests
//!
//! The JSON the fallback hands to callers, key by key.

use crate::brain::{Category, FallbackEngine, FixedVariant, ResponseSynthesizer};
use crate::contract::{AnalysisResponse, ChatResponse, Priority, Suggestion, DEMO_MARKER};
use crate::models::{AnalyzeRequest, ChatMessage, ChatRequest};
use serde_json::Value;

const CHAT_KEYS: [&str; 7] = [
    "reformulation",
    "emotion_detected",
    "suggested_actions",
    "open_questions",
    "motivational_summary",
    "emotions",
    "stress_score",
];

const ANALYSIS_EMOTION_KEYS: [&str; 6] =
    ["joie", "tristesse", "anxiété", "colère", "fatigue", "motivation"];

fn object_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[cfg(test)]
mod chat_contract_tests {
    use super::*;

    #[test]
    fn test_chat_keys_for_every_category() {
        let synth = ResponseSynthesizer::new();

        for category in Category::ALL {
            let reply = ChatResponse::from_fallback(synth.synthesize(category, &mut FixedVariant(0)));
            let value = serde_json::to_value(&reply).unwrap();

            let mut expected: Vec<String> = CHAT_KEYS.iter().map(|k| k.to_string()).collect();
            expected.sort();
            assert_eq!(object_keys(&value), expected, "Wrong keys for {}", category);

            let mut emotion_keys = vec!["anxiété", "joie", "motivation"];
            emotion_keys.sort();
            assert_eq!(object_keys(&value["emotions"]), emotion_keys);

            assert!(value["stress_score"].as_u64().unwrap() <= 10);
            assert!(!value["suggested_actions"].as_array().unwrap().is_empty());
            assert!(!value["open_questions"].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_chat_summary_carries_demo_marker() {
        let engine = FallbackEngine::new();
        let request = ChatRequest {
            messages: vec![ChatMessage::user("Je suis triste et seul")],
        };

        let reply = engine.chat_reply(&request, &mut FixedVariant(0)).unwrap();
        assert_eq!(reply.emotion_detected, "Tristesse");
        assert!(reply.motivational_summary.ends_with(DEMO_MARKER));
        assert!(reply.is_demo());
    }

    #[test]
    fn test_chat_emotions_come_from_payload() {
        let synth = ResponseSynthesizer::new();
        let payload = synth.synthesize(Category::Anxiety, &mut FixedVariant(0));
        let reply = ChatResponse::from_fallback(payload.clone());

        assert_eq!(reply.emotions.joie, payload.emotions.joy);
        assert_eq!(reply.emotions.anxiete, payload.emotions.anxiety);
        assert_eq!(reply.emotions.motivation, payload.emotions.motivation);
        assert_eq!(reply.stress_score, payload.stress);
    }

    #[test]
    fn test_render_reply_layout() {
        let engine = FallbackEngine::new();
        let reply = engine.chat_reply_for_text("Je suis épuisé", &mut FixedVariant(0)).unwrap();
        let rendered = reply.render_reply();

        assert!(rendered.starts_with(&reply.reformulation));
        assert!(rendered.contains(&format!("💪 {}", reply.motivational_summary)));
        assert!(rendered.contains("🌱 Suggestions :"));
        for action in &reply.suggested_actions {
            assert!(rendered.contains(&format!("• {}", action)));
        }
        assert!(rendered.ends_with(&format!("❓ {}", reply.open_questions[0])));
    }
}

#[cfg(test)]
mod analysis_contract_tests {
    use super::*;

    #[test]
    fn test_fixed_analysis_ignores_text() {
        let engine = FallbackEngine::new();

        let texts = [
            "Je suis épuisé",
            "Mon père est mort",
            "xyz123",
            "Journée magnifique au soleil",
        ];
        let analyses: Vec<AnalysisResponse> = texts
            .iter()
            .map(|text| {
                let request = AnalyzeRequest {
                    date: Some("2024-06-01".to_string()),
                    ..AnalyzeRequest::new(*text)
                };
                engine.analysis(&request, &mut FixedVariant(0)).unwrap()
            })
            .collect();

        for analysis in &analyses[1..] {
            assert_eq!(analysis, &analyses[0]);
        }
        assert_eq!(analyses[0], AnalysisResponse::demo("2024-06-01".to_string(), None));
    }

    #[test]
    fn test_fixed_analysis_shape() {
        let analysis = AnalysisResponse::demo("2024-06-01".to_string(), None);

        assert_eq!(analysis.stress_score, 5);
        assert_eq!(analysis.suggestions.len(), 3);
        assert!(matches!(analysis.suggestions[0], Suggestion::MicroExercise { duration_min: 3, .. }));
        assert!(matches!(analysis.suggestions[1], Suggestion::MicroExercise { duration_min: 2, .. }));
        assert!(matches!(
            analysis.suggestions[2],
            Suggestion::Todo {
                priority: Priority::High,
                ..
            }
        ));
        assert!(analysis.is_demo());
    }

    #[test]
    fn test_stress_defaults_to_five() {
        let engine = FallbackEngine::new();

        let without = engine
            .analysis(&AnalyzeRequest::new("Une journée"), &mut FixedVariant(0))
            .unwrap();
        assert_eq!(without.stress_score, 5);

        let with = AnalyzeRequest {
            stress_level: Some(8),
            ..AnalyzeRequest::new("Une journée")
        };
        let with = engine.analysis(&with, &mut FixedVariant(0)).unwrap();
        assert_eq!(with.stress_score, 8);
    }

    #[test]
    fn test_zero_stress_is_kept() {
        let engine = FallbackEngine::new();
        let request = AnalyzeRequest {
            stress_level: Some(0),
            ..AnalyzeRequest::new("Une journée tranquille")
        };

        let analysis = engine.analysis(&request, &mut FixedVariant(0)).unwrap();
        assert_eq!(analysis.stress_score, 0);
    }

    #[test]
    fn test_analysis_keys_never_omitted() {
        let value = serde_json::to_value(AnalysisResponse::demo("2024-06-01".to_string(), None)).unwrap();

        for key in ["date", "emotions", "stress_score", "suggestions", "summary"] {
            assert!(value.get(key).is_some(), "Missing key {}", key);
        }

        let mut expected: Vec<String> =
            ANALYSIS_EMOTION_KEYS.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(object_keys(&value["emotions"]), expected);

        assert_eq!(value["suggestions"][0]["type"], "micro-exercice");
        assert_eq!(value["suggestions"][2]["type"], "to-do");
        assert_eq!(value["suggestions"][2]["priority"], "Haute");
    }

    #[test]
    fn test_model_analysis_reply_round_trips_alerts() {
        let body = r#"{
            "date": "2024-06-01",
            "emotions": {"joie": 2, "tristesse": 7, "anxiété": 8, "colère": 3, "fatigue": 6, "motivation": 2},
            "stress_score": 9,
            "suggestions": [{"type": "to-do", "task": "Appeler un proche", "priority": "Haute"}],
            "summary": "Prenez soin de vous.",
            "alerts": ["Stress très élevé"]
        }"#;

        let analysis: AnalysisResponse = crate::contract::parse_model_reply(body).unwrap();
        assert_eq!(analysis.alerts, Some(vec!["Stress très élevé".to_string()]));
        assert!(!analysis.is_demo());
        assert_eq!(analysis.emotions.colere, 3);
    }
}
