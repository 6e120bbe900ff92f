use skillquest_core::CourseRequest;

/// Append the per-request user instruction: the course parameters and the
/// structural requirements for the outline.
///
/// Field values go in exactly as provided. The keywords clause is only
/// present when the keywords field is non-empty.
pub fn append_instructions(prompt: &mut String, course: &CourseRequest) {
    prompt.push_str(
        "Génère un plan de cours détaillé pour l'unité d'enseignement \"SkillQuest\". \
         Le cours est destiné à des étudiants ingénieurs de niveau L1/L2. Le contenu \
         doit être rigoureux et inclure des exemples pertinents.\n\n",
    );

    prompt.push_str("Voici les détails du cours à créer :\n");
    prompt.push_str(&format!("- **Domaine d'étude :** {}\n", course.domain));
    prompt.push_str(&format!("- **Compétence visée :** {}\n", course.skill));
    prompt.push_str(&format!(
        "- **Sujet principal du cours :** {}\n",
        course.subject
    ));
    if !course.keywords.is_empty() {
        prompt.push_str(&format!(
            "- **Mots-clés à inclure :** {}\n",
            course.keywords
        ));
    }

    prompt.push_str("\nStructure et formatage requis :\n");
    prompt.push_str(&format!(
        "- Le plan doit commencer par un titre principal (`#`) qui mentionne \
         \"SkillQuest\", la compétence, et le sujet. Par exemple: \
         \"# SkillQuest - {}\".\n",
        course.topic()
    ));
    prompt.push_str(
        "- Il doit inclure une introduction, plusieurs modules principaux, et une \
         conclusion ou un résumé.\n",
    );
    prompt.push_str(&format!(
        "- L'introduction doit expliquer brièvement l'importance de la compétence \
         \"{}\" dans le domaine \"{}\" pour un futur ingénieur.\n",
        course.skill, course.domain
    ));
    prompt.push_str(
        "- Chaque module doit être un titre de niveau 2 (`##`) et contenir plusieurs \
         leçons en tant que titres de niveau 3 (`###`).\n\
         - Chaque leçon doit présenter les concepts clés, des définitions, des \
         théorèmes et des exemples.\n\
         - **Important :** Respecte scrupuleusement les règles de formatage pour les \
         mathématiques, les définitions et les théorèmes comme spécifié dans les \
         instructions système (formules avec `$` et `$$`, définitions et théorèmes \
         avec `>`).\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(course: &CourseRequest) -> String {
        let mut out = String::new();
        append_instructions(&mut out, course);
        out
    }

    fn course() -> CourseRequest {
        CourseRequest {
            domain: "Développement Web".into(),
            skill: "React.js".into(),
            subject: "Introduction aux Hooks et au state".into(),
            keywords: String::new(),
        }
    }

    #[test]
    fn interpolates_fields_verbatim() {
        let out = build(&course());
        assert!(out.contains("- **Domaine d'étude :** Développement Web"));
        assert!(out.contains("- **Compétence visée :** React.js"));
        assert!(out.contains("- **Sujet principal du cours :** Introduction aux Hooks et au state"));
    }

    #[test]
    fn does_not_trim_or_recase_fields() {
        let mut c = course();
        c.skill = "  React.JS  ".into();
        let out = build(&c);
        assert!(out.contains("- **Compétence visée :**   React.JS  \n"));
    }

    #[test]
    fn title_example_mentions_product_and_topic() {
        let out = build(&course());
        assert!(out.contains("\"# SkillQuest - React.js : Introduction aux Hooks et au state\""));
    }

    #[test]
    fn empty_keywords_omit_the_clause() {
        assert!(!build(&course()).contains("Mots-clés"));
    }

    #[test]
    fn keywords_are_listed_when_present() {
        let mut c = course();
        c.keywords = "useState, useEffect, components, props".into();
        let out = build(&c);
        assert!(out.contains("- **Mots-clés à inclure :** useState, useEffect, components, props"));
    }

    #[test]
    fn whitespace_only_keywords_still_emit_the_clause() {
        // The check is on raw emptiness, not on the trimmed value.
        let mut c = course();
        c.keywords = "   ".into();
        let out = build(&c);
        assert!(out.contains("- **Mots-clés à inclure :**    \n"));
    }

    #[test]
    fn structure_requirements_are_present() {
        let out = build(&course());
        assert!(out.contains("titre de niveau 2 (`##`)"));
        assert!(out.contains("titres de niveau 3 (`###`)"));
        assert!(out.contains("une introduction, plusieurs modules principaux, et une conclusion"));
    }
}
