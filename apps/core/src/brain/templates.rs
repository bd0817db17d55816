//! Static response templates, one per category.
//!
//! These are authored data, not computed values. Scores follow each topic's
//! semantics by convention (grief: low joy, high stress; anxiety: high
//! anxiety and stress; ...).

use super::categories::{Category, RelationalTone};
use super::payload::{EmotionVector, ResponsePayload};

/// A fixed response for one category (or one default-bucket variant)
#[derive(Debug)]
pub struct Template {
    pub emotion_label: &'static str,
    pub reformulation: &'static str,
    pub actions: &'static [&'static str],
    pub questions: &'static [&'static str],
    pub summary: &'static str,
    pub emotions: EmotionVector,
    pub stress: u8,
}

impl Template {
    pub fn to_payload(&self, category: Category, variant: Option<usize>) -> ResponsePayload {
        ResponsePayload {
            category,
            variant,
            emotion_label: self.emotion_label.to_string(),
            reformulation: self.reformulation.to_string(),
            actions: self.actions.iter().map(|s| s.to_string()).collect(),
            questions: self.questions.iter().map(|s| s.to_string()).collect(),
            summary: self.summary.to_string(),
            emotions: self.emotions,
            stress: self.stress,
        }
    }
}

static GREETING: Template = Template {
    emotion_label: "Accueillant",
    reformulation: "Bonjour ! Je suis ravi de vous retrouver. Je suis MindSpace, votre espace d'écoute.",
    actions: &[
        "Prenez une position confortable",
        "Prenez une grande inspiration",
        "Dites-moi simplement comment vous vous sentez",
    ],
    questions: &[
        "Comment vous sentez-vous en ce moment ?",
        "Qu'est-ce qui occupe vos pensées aujourd'hui ?",
    ],
    summary: "Je suis là pour vous écouter sans jugement. Prenez votre temps.",
    emotions: EmotionVector::new(6, 2, 3, 1, 3, 6),
    stress: 3,
};

static IDENTITY: Template = Template {
    emotion_label: "Identité",
    reformulation: "Merci de me faire confiance pour partager cela. Votre identité est une part précieuse de qui vous êtes, et elle mérite d'être accueillie avec respect et bienveillance.",
    actions: &[
        "Rappelez-vous que vous avez le droit d'être vous-même",
        "Entourez-vous de personnes qui vous soutiennent inconditionnellement",
        "Prenez un moment pour apprécier votre authenticité",
    ],
    questions: &[
        "Comment vous sentez-vous par rapport à cela aujourd'hui ?",
        "Avez-vous le soutien dont vous avez besoin autour de vous ?",
    ],
    summary: "Être soi-même est un acte de courage et de liberté. Vous êtes valide exactement tel que vous êtes.",
    emotions: EmotionVector::new(5, 3, 4, 2, 3, 6),
    stress: 4,
};

static SOMATIC: Template = Template {
    emotion_label: "Inconfort physique",
    reformulation: "Je comprends que vous ressentiez des symptômes physiques désagréables. C'est souvent la façon dont notre corps exprime un stress ou une émotion intense.",
    actions: &[
        "Asseyez-vous et posez les pieds bien à plat au sol",
        "Buvez de l'eau par petites gorgées",
        "Respirez lentement : inspirez par le nez, soufflez doucement par la bouche comme dans une paille",
    ],
    questions: &[
        "Depuis combien de temps ressentez-vous cela ?",
        "Est-ce lié à une situation stressante récente ?",
    ],
    summary: "Votre corps vous parle. En l'écoutant et en le calmant, vous apaisez aussi votre esprit.",
    emotions: EmotionVector::new(2, 4, 8, 2, 6, 3),
    stress: 8,
};

static GRIEF: Template = Template {
    emotion_label: "Deuil",
    reformulation: "Je suis profondément touché par ce que vous partagez. Perdre quelqu'un qu'on aime est une des épreuves les plus difficiles. Votre douleur est légitime.",
    actions: &[
        "Autorisez-vous à pleurer, c'est nécessaire",
        "Ne restez pas seul(e) avec votre peine",
        "Écrivez ce que vous ressentez pour cette personne",
    ],
    questions: &[
        "Quel est votre plus beau souvenir avec cette personne ?",
        "Comment puis-je vous soutenir dans cette épreuve ?",
    ],
    summary: "Le deuil est un chemin unique. Prenez tout le temps dont vous avez besoin.",
    emotions: EmotionVector::new(1, 9, 6, 3, 6, 2),
    stress: 8,
};

static DEPRESSION: Template = Template {
    emotion_label: "Dépression",
    reformulation: "Je sens un grand poids dans vos mots. Ce sentiment de vide ou de lassitude est très difficile à porter seul.",
    actions: &[
        "Faites une toute petite action (boire un verre d'eau, ouvrir les volets)",
        "Ne restez pas isolé(e), envoyez un message à un proche",
        "Si c'est trop lourd, appelez le 3114 (écoute 24/7)",
    ],
    questions: &[
        "Depuis quand vous sentez-vous comme ça ?",
        "Y a-t-il un moment de la journée où ça va un peu mieux ?",
    ],
    summary: "Vous n'êtes pas vos pensées sombres. C'est une tempête, et vous êtes le ciel qui reste derrière.",
    emotions: EmotionVector::new(1, 9, 5, 2, 8, 1),
    stress: 7,
};

static RELATIONAL_CONFLICT: Template = Template {
    emotion_label: "Conflit relationnel",
    reformulation: "Les tensions dans le couple sont éprouvantes. On se sent souvent incompris ou blessé quand on tient à l'autre.",
    actions: &[
        "Laissez retomber la pression avant de reparler",
        "Écrivez vos ressentis pour y voir plus clair",
        "Faites quelque chose pour vous changer les idées",
    ],
    questions: &[
        "Qu'est-ce qui vous a le plus touché dans cette situation ?",
        "Qu'aimeriez-vous pouvoir dire calmement ?",
    ],
    summary: "Les conflits peuvent aussi permettre de mieux se comprendre, une fois l'orage passé.",
    emotions: EmotionVector::new(2, 5, 7, 7, 4, 4),
    stress: 7,
};

static RELATIONAL_BREAKUP: Template = Template {
    emotion_label: "Rupture",
    reformulation: "Une séparation est un véritable choc émotionnel. C'est normal de se sentir perdu ou d'avoir mal.",
    actions: &[
        "Soyez doux avec vous-même aujourd'hui",
        "Coupez les réseaux sociaux si ça vous fait mal",
        "Appelez un(e) ami(e) bienveillant(e)",
    ],
    questions: &[
        "Qu'est-ce qui est le plus difficile pour vous en ce moment ?",
        "De quoi auriez-vous besoin pour vous apaiser un peu ?",
    ],
    summary: "Cette douleur finira par s'atténuer. Vous méritez d'être aimé(e) et respecté(e).",
    emotions: EmotionVector::new(1, 8, 6, 4, 5, 2),
    stress: 8,
};

static RELATIONAL_NEUTRAL: Template = Template {
    emotion_label: "Relationnel",
    reformulation: "Les relations amoureuses occupent beaucoup de place dans nos pensées. C'est un sujet important.",
    actions: &[
        "Prenez du recul pour analyser la situation",
        "Identifiez vos besoins dans cette relation",
        "Communiquez avec votre partenaire",
    ],
    questions: &[
        "Comment vous sentez-vous globalement dans cette relation ?",
        "Qu'est-ce qui est important pour vous ?",
    ],
    summary: "Écoutez votre intuition, elle est souvent de bon conseil.",
    emotions: EmotionVector::new(4, 3, 5, 2, 3, 5),
    stress: 5,
};

static ANXIETY: Template = Template {
    emotion_label: "Anxiété",
    reformulation: "Je perçois beaucoup de tension. Le stress et l'anxiété peuvent être très envahissants, mais ils ne sont pas dangereux.",
    actions: &[
        "Technique 4-7-8 : Inspirez 4s, bloquez 7s, soufflez 8s",
        "Regardez autour de vous et nommez 3 objets bleus",
        "Secouez vos mains pour évacuer le surplus d'énergie",
    ],
    questions: &[
        "Qu'est-ce qui a déclenché ce stress ?",
        "Où ressentez-vous cette tension dans votre corps ?",
    ],
    summary: "C'est une vague. Elle monte, mais elle finit toujours par redescendre. Respirez.",
    emotions: EmotionVector::new(3, 3, 8, 3, 5, 4),
    stress: 8,
};

static SADNESS: Template = Template {
    emotion_label: "Tristesse",
    reformulation: "Je sens une grande tristesse. Se sentir seul ou abattu est une émotion lourde, mais vous avez le droit de la ressentir.",
    actions: &[
        "Préparez-vous une boisson chaude réconfortante",
        "Enroulez-vous dans un plaid ou quelque chose de doux",
        "Écoutez une musique qui vous apaise ou regardez un film doudou",
    ],
    questions: &[
        "Qu'est-ce qui vous ferait un tout petit peu de bien maintenant ?",
        "Voulez-vous me raconter ce qui vous rend triste ?",
    ],
    summary: "La tristesse est là pour nous dire qu'on a besoin de réconfort. Soyez votre meilleur ami aujourd'hui.",
    emotions: EmotionVector::new(2, 8, 4, 2, 5, 3),
    stress: 6,
};

static FATIGUE: Template = Template {
    emotion_label: "Fatigue",
    reformulation: "Vous semblez vraiment à bout de forces. Votre corps vous réclame du repos, c'est important de l'écouter.",
    actions: &[
        "Fermez les yeux 5 minutes, juste pour déconnecter",
        "Éloignez votre téléphone",
        "Prévoyez de vous coucher tôt ce soir",
    ],
    questions: &[
        "Votre sommeil est-il réparateur en ce moment ?",
        "Qu'est-ce qui vous prend le plus d'énergie ?",
    ],
    summary: "Le repos n'est pas une perte de temps, c'est une nécessité biologique. Prenez soin de vous.",
    emotions: EmotionVector::new(3, 4, 4, 2, 9, 2),
    stress: 6,
};

static ANGER: Template = Template {
    emotion_label: "Colère",
    reformulation: "Je sens beaucoup d'irritation ou de colère. C'est une émotion légitime qui signale souvent une injustice ou une limite franchie.",
    actions: &[
        "Expulsez l'air fort par la bouche plusieurs fois",
        "Gribouillez frénétiquement sur une feuille de papier",
        "Marchez d'un pas rapide pour évacuer l'adrénaline",
    ],
    questions: &[
        "Qu'est-ce qui vous a mis dans cet état ?",
        "Quelle limite a été dépassée selon vous ?",
    ],
    summary: "La colère est une énergie. Une fois exprimée sainement, elle peut servir à changer les choses.",
    emotions: EmotionVector::new(2, 3, 6, 8, 4, 5),
    stress: 7,
};

static WORK: Template = Template {
    emotion_label: "Professionnel",
    reformulation: "Les soucis professionnels semblent vous peser. C'est difficile de déconnecter quand le travail prend le dessus.",
    actions: &[
        "Notez ce qui doit être fait pour demain et fermez le carnet",
        "Changez de pièce ou sortez pour marquer la fin de la journée",
        "Faites une activité qui n'a rien à voir avec le travail",
    ],
    questions: &[
        "Qu'est-ce qui est le plus stressant dans votre travail actuellement ?",
        "Arrivez-vous à faire des pauses ?",
    ],
    summary: "Vous êtes bien plus que votre travail. Votre santé mentale est la priorité.",
    emotions: EmotionVector::new(4, 3, 6, 4, 6, 4),
    stress: 6,
};

const LISTENING_LABEL: &str = "Écoute";
const LISTENING_EMOTIONS: EmotionVector = EmotionVector::new(5, 4, 4, 3, 4, 5);
const LISTENING_STRESS: u8 = 4;

/// Active-listening variants of the default bucket
pub static LISTENING_VARIANTS: [Template; 3] = [
    Template {
        emotion_label: LISTENING_LABEL,
        reformulation: "Je vous écoute attentivement. Parfois, c'est difficile de mettre des mots exacts sur ce qu'on ressent, mais je suis là.",
        actions: &[
            "Prenez juste un moment pour respirer calmement",
            "Observez comment vous vous sentez dans votre corps",
            "Soyez bienveillant(e) avec vous-même",
        ],
        questions: &[
            "Si vous deviez décrire votre humeur par une météo, quelle serait-elle ?",
            "Qu'est-ce qui vous ferait du bien là, tout de suite ?",
        ],
        summary: "L'important est d'être à l'écoute de soi. Vous faites la bonne démarche.",
        emotions: LISTENING_EMOTIONS,
        stress: LISTENING_STRESS,
    },
    Template {
        emotion_label: LISTENING_LABEL,
        reformulation: "Je suis là avec vous. Chaque émotion a le droit d'exister. Prenez le temps de l'accueillir.",
        actions: &[
            "Posez une main sur votre ventre et respirez",
            "Regardez quelque chose d'apaisant autour de vous",
            "Détendez vos épaules",
        ],
        questions: &[
            "Qu'est-ce qui occupe le plus votre esprit en ce moment ?",
            "De quoi avez-vous besoin ?",
        ],
        summary: "Vous n'êtes pas seul(e). Je suis là pour vous accompagner.",
        emotions: LISTENING_EMOTIONS,
        stress: LISTENING_STRESS,
    },
    Template {
        emotion_label: LISTENING_LABEL,
        reformulation: "Merci de me parler. C'est courageux de s'ouvrir. Je suis là pour vous soutenir.",
        actions: &[
            "Faites une petite pause dans votre journée",
            "Buvez un peu d'eau",
            "Rappelez-vous que ce moment va passer",
        ],
        questions: &[
            "Comment vous sentez-vous physiquement ?",
            "Y a-t-il quelque chose qui vous préoccupe particulièrement ?",
        ],
        summary: "Prenez les choses une par une. Respirez.",
        emotions: LISTENING_EMOTIONS,
        stress: LISTENING_STRESS,
    },
];

/// Template of a non-default category; None for the default bucket
pub fn template_for(category: Category) -> Option<&'static Template> {
    let template = match category {
        Category::Greeting => &GREETING,
        Category::Identity => &IDENTITY,
        Category::Somatic => &SOMATIC,
        Category::Grief => &GRIEF,
        Category::Depression => &DEPRESSION,
        Category::Relational(RelationalTone::Conflict) => &RELATIONAL_CONFLICT,
        Category::Relational(RelationalTone::Breakup) => &RELATIONAL_BREAKUP,
        Category::Relational(RelationalTone::Neutral) => &RELATIONAL_NEUTRAL,
        Category::Anxiety => &ANXIETY,
        Category::Sadness => &SADNESS,
        Category::Fatigue => &FATIGUE,
        Category::Anger => &ANGER,
        Category::Work => &WORK,
        Category::Listening => return None,
    };
    Some(template)
}
