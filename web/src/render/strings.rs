//! Static page text per display language

use crate::domain::entities::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    MetaTitle,
    IntroductionTitle,
    Portfolio,
    Hello,
    Name,
    Skills,
    Links,
    Projects,
    Teams,
    Awards,
    /// Label of the switch to the other language
    LanguageChange,
    NotFound,
    Failure,
}

pub fn text(key: Text, language: Language) -> &'static str {
    match (key, language) {
        (Text::MetaTitle, Language::Ko) => "박성민 포트폴리오",
        (Text::MetaTitle, Language::En) => "Seongmin Park's Portfolio",
        (Text::IntroductionTitle, Language::Ko) => "문제를 끝까지 파고드는 개발자, 박성민입니다.",
        (Text::IntroductionTitle, Language::En) => {
            "I'm Seongmin Park, a developer who digs into problems to the end."
        }
        (Text::Portfolio, Language::Ko) => "포트폴리오",
        (Text::Portfolio, Language::En) => "Portfolio",
        (Text::Hello, Language::Ko) => "안녕하세요!",
        (Text::Hello, Language::En) => "Hello!",
        (Text::Name, Language::Ko) => "박성민입니다.",
        (Text::Name, Language::En) => "I'm Seongmin Park.",
        (Text::Skills, Language::Ko) => "기술",
        (Text::Skills, Language::En) => "Skills",
        (Text::Links, Language::Ko) => "링크",
        (Text::Links, Language::En) => "Links",
        (Text::Projects, Language::Ko) => "프로젝트",
        (Text::Projects, Language::En) => "Projects",
        (Text::Teams, Language::Ko) => "팀",
        (Text::Teams, Language::En) => "Teams",
        (Text::Awards, Language::Ko) => "수상",
        (Text::Awards, Language::En) => "Awards",
        (Text::LanguageChange, Language::Ko) => "English",
        (Text::LanguageChange, Language::En) => "한국어",
        (Text::NotFound, Language::Ko) => "페이지를 찾을 수 없습니다.",
        (Text::NotFound, Language::En) => "Page not found.",
        (Text::Failure, Language::Ko) => "포트폴리오를 불러오지 못했습니다.",
        (Text::Failure, Language::En) => "Failed to load the portfolio.",
    }
}
