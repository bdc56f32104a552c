//! Per-language template tables for the fortune generator.
//!
//! Two tables with different coverage rules:
//!
//! - The base table ([`base_templates`]) covers every [`Language`]
//!   variant; unsupported codes never reach it because they are
//!   normalized at parse time.
//! - The zodiac fortune subtable ([`fortune_templates`]) and the
//!   birth-date placeholder messages ([`birth_date_placeholder`]) only
//!   carry `ko` and `en` content and fall back to `ko` per lookup.
//!
//! Zodiac fortune templates interpolate `{zodiac}` and `{year}`.

use crate::language::Language;

/// Base narrative templates and fixed feature/advice lists for one language.
pub struct TemplateSet {
    pub love: [&'static str; 3],
    pub money: [&'static str; 3],
    pub health: [&'static str; 3],
    pub features: [&'static str; 5],
    pub advice: [&'static str; 5],
}

/// Birth-date fortune templates for one language.
pub struct FortuneTemplates {
    pub today: [&'static str; 3],
    pub new_year: [&'static str; 3],
    pub personality: [&'static str; 3],
}

/// Base template table for the given language.
pub fn base_templates(lang: Language) -> &'static TemplateSet {
    match lang {
        Language::Ko => &KO_TEMPLATES,
        Language::En => &EN_TEMPLATES,
        Language::Zh => &ZH_TEMPLATES,
        Language::Ja => &JA_TEMPLATES,
        Language::Es => &ES_TEMPLATES,
    }
}

/// Zodiac fortune subtable for the given language.
///
/// Only `ko` and `en` have content; every other language falls back to
/// `ko`, independently of the base-table normalization.
pub fn fortune_templates(lang: Language) -> &'static FortuneTemplates {
    match lang {
        Language::Ko => &KO_FORTUNES,
        Language::En => &EN_FORTUNES,
        _ => &KO_FORTUNES,
    }
}

/// Fixed message used for the derived fortune fields when no birth date
/// was supplied. Only `ko` and `en` variants exist; other languages fall
/// back to `ko`.
pub fn birth_date_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::Ko => "생년월일을 입력하시면 더 자세한 운세를 알려드립니다.",
        Language::En => "Please provide your birth date for a more detailed fortune.",
        _ => "생년월일을 입력하시면 더 자세한 운세를 알려드립니다.",
    }
}

// ---------------------------------------------------------------------------
// Korean (default)
// ---------------------------------------------------------------------------

static KO_TEMPLATES: TemplateSet = TemplateSet {
    love: [
        "깊고 안정적인 감정선을 가지고 있습니다. 진실한 사랑을 만날 가능성이 높으며, 장기적인 관계에서 행복을 찾을 것입니다.",
        "감정이 풍부하고 로맨틱한 성향을 보입니다. 열정적인 사랑을 경험하게 될 것이며, 상대방에게 깊은 인상을 남길 것입니다.",
        "신중하고 진지한 사랑 스타일을 가지고 있습니다. 시간을 두고 천천히 발전하는 관계에서 진정한 행복을 찾을 것입니다.",
    ],
    money: [
        "꾸준한 노력으로 재물을 축적하는 타입입니다. 투자보다는 저축을 통해 안정적인 부를 쌓을 가능성이 높습니다.",
        "사업이나 투자에 재능이 있습니다. 큰 위험보다는 안정적인 수익을 추구하는 것이 좋겠습니다.",
        "재정 관리 능력이 뛰어납니다. 계획적인 소비와 투자로 꾸준히 재산을 늘려갈 것입니다.",
    ],
    health: [
        "매우 강한 생명력을 보여줍니다. 건강한 생활습관을 유지한다면 장수하며 활기찬 삶을 살 것입니다.",
        "전반적으로 건강한 편이지만 스트레스 관리가 중요합니다. 충분한 휴식과 운동을 권합니다.",
        "체력이 좋고 회복력이 빠른 편입니다. 정기적인 건강검진으로 더욱 건강한 삶을 유지하세요.",
    ],
    features: [
        "감정이 풍부하고 예술적 감각이 뛰어남",
        "논리적 사고력과 분석능력이 우수함",
        "리더십이 강하고 추진력이 뛰어남",
        "직감이 뛰어나고 판단력이 정확함",
        "창의적이고 독창적인 아이디어가 풍부함",
    ],
    advice: [
        "인내심을 기르면 더 큰 성공을 얻을 수 있음",
        "건강 관리에 더욱 신경쓰는 것이 좋음",
        "새로운 도전을 두려워하지 말고 적극적으로 임하세요",
        "인간관계에서 소통을 더욱 중요시하세요",
        "꾸준한 노력이 큰 결실을 맺을 것입니다",
    ],
};

static KO_FORTUNES: FortuneTemplates = FortuneTemplates {
    today: [
        "{zodiac}띠인 당신, 오늘은 좋은 기운이 함께합니다. 새로운 만남이나 기회에 열린 마음을 가지세요.",
        "{zodiac}띠의 오늘 운세는 안정적입니다. 무리한 결정보다는 차분한 판단이 행운을 부릅니다.",
        "{zodiac}띠에게 오늘은 작은 행운이 깃드는 날입니다. 주변 사람들에게 먼저 다가가 보세요.",
    ],
    new_year: [
        "{year}년, {zodiac}띠인 당신에게 도약의 해가 될 것입니다. 상반기에 찾아오는 기회를 놓치지 마세요.",
        "{year}년은 {zodiac}띠에게 결실의 해입니다. 그동안의 노력이 구체적인 성과로 이어질 것입니다.",
        "{year}년, {zodiac}띠는 인간관계에서 큰 행운을 만납니다. 귀인이 가까운 곳에서 나타날 것입니다.",
    ],
    personality: [
        "당신은 따뜻한 감성과 냉철한 판단력을 함께 가진 조화로운 성격입니다.",
        "당신은 호기심이 많고 도전을 즐기는 탐험가형 성격입니다.",
        "당신은 신중하고 책임감이 강한 계획가형 성격입니다.",
    ],
};

// ---------------------------------------------------------------------------
// English
// ---------------------------------------------------------------------------

static EN_TEMPLATES: TemplateSet = TemplateSet {
    love: [
        "You have a deep and stable heart line. You are likely to meet a true love and find happiness in a long-term relationship.",
        "You show a rich, romantic emotional nature. You will experience passionate love and leave a deep impression on your partner.",
        "You have a careful and sincere style of love. You will find true happiness in a relationship that develops slowly over time.",
    ],
    money: [
        "You are the type who accumulates wealth through steady effort. You are more likely to build stable wealth through saving than investing.",
        "You have a talent for business and investment. Pursuing stable returns rather than big risks will serve you well.",
        "You have an excellent ability to manage finances. Planned spending and investment will steadily grow your assets.",
    ],
    health: [
        "Your life line shows very strong vitality. If you keep healthy habits, you will live a long and energetic life.",
        "You are generally healthy, but stress management matters. Plenty of rest and regular exercise are recommended.",
        "You have good stamina and recover quickly. Keep up regular checkups to maintain an even healthier life.",
    ],
    features: [
        "Emotionally rich with an outstanding artistic sense",
        "Excellent logical thinking and analytical skills",
        "Strong leadership and great drive",
        "Sharp intuition and accurate judgment",
        "Full of creative and original ideas",
    ],
    advice: [
        "Cultivating patience will bring you greater success",
        "Paying more attention to your health would be wise",
        "Do not fear new challenges; take them on actively",
        "Value communication more in your relationships",
        "Steady effort will bear great fruit",
    ],
};

static EN_FORTUNES: FortuneTemplates = FortuneTemplates {
    today: [
        "Born in the year of the {zodiac}, good energy is with you today. Keep an open mind toward new encounters and opportunities.",
        "Today's fortune for the {zodiac} sign is steady. Calm judgment, not rushed decisions, invites luck today.",
        "Today carries a small stroke of luck for the {zodiac} sign. Try reaching out to the people around you first.",
    ],
    new_year: [
        "{year} will be a year of great leaps for you, born under the {zodiac}. Do not miss the opportunity arriving in the first half.",
        "{year} is a year of harvest for the {zodiac} sign. Your past efforts will turn into concrete results.",
        "In {year}, the {zodiac} sign meets great luck in relationships. A benefactor will appear closer than you think.",
    ],
    personality: [
        "You have a harmonious personality that combines warm sensitivity with cool judgment.",
        "You are an explorer type, full of curiosity and fond of challenges.",
        "You are a planner type, careful and with a strong sense of responsibility.",
    ],
};

// ---------------------------------------------------------------------------
// Chinese
// ---------------------------------------------------------------------------

static ZH_TEMPLATES: TemplateSet = TemplateSet {
    love: [
        "您拥有深邃而稳定的感情线。很有可能遇到真爱，并在长期的关系中找到幸福。",
        "您的感情丰富，富有浪漫气质。您将经历热烈的爱情，并给对方留下深刻的印象。",
        "您的爱情风格慎重而真诚。在慢慢发展的关系中，您会找到真正的幸福。",
    ],
    money: [
        "您是通过不懈努力积累财富的类型。比起投资，通过储蓄更有可能积累稳定的财富。",
        "您在事业和投资方面很有天赋。与其冒大的风险，不如追求稳定的收益。",
        "您的理财能力出众。有计划的消费和投资会让您的财产稳步增长。",
    ],
    health: [
        "您的生命线显示出非常旺盛的生命力。保持健康的生活习惯，您将健康长寿、充满活力。",
        "您整体比较健康，但压力管理很重要。建议保证充分的休息和运动。",
        "您体力好、恢复快。坚持定期体检，保持更加健康的生活。",
    ],
    features: [
        "感情丰富，艺术感觉出众",
        "逻辑思维和分析能力优秀",
        "领导力强，执行力出众",
        "直觉敏锐，判断准确",
        "富有创意和独到的想法",
    ],
    advice: [
        "培养耐心会带来更大的成功",
        "更加注意健康管理为好",
        "不要害怕新的挑战，积极应对",
        "在人际关系中更加重视沟通",
        "持之以恒的努力会结出硕果",
    ],
};

// ---------------------------------------------------------------------------
// Japanese
// ---------------------------------------------------------------------------

static JA_TEMPLATES: TemplateSet = TemplateSet {
    love: [
        "深く安定した感情線を持っています。真実の愛に出会う可能性が高く、長期的な関係の中で幸せを見つけるでしょう。",
        "感情が豊かでロマンチックな傾向があります。情熱的な恋愛を経験し、相手に深い印象を残すでしょう。",
        "慎重で真剣な恋愛スタイルを持っています。時間をかけてゆっくり育つ関係の中で、本当の幸せを見つけるでしょう。",
    ],
    money: [
        "地道な努力で財を築くタイプです。投資よりも貯蓄によって安定した富を築く可能性が高いです。",
        "事業や投資の才能があります。大きなリスクよりも安定した収益を追求するのが良いでしょう。",
        "家計管理の能力に優れています。計画的な消費と投資で着実に財産を増やしていくでしょう。",
    ],
    health: [
        "とても強い生命力を示しています。健康的な生活習慣を保てば、長寿で活気に満ちた人生を送るでしょう。",
        "全体的に健康ですが、ストレス管理が大切です。十分な休息と運動をおすすめします。",
        "体力があり回復力も早いほうです。定期的な健康診断でさらに健康な生活を維持しましょう。",
    ],
    features: [
        "感情が豊かで芸術的なセンスに優れている",
        "論理的思考力と分析力に優れている",
        "リーダーシップが強く行動力がある",
        "直感が鋭く判断力が正確である",
        "創造的で独創的なアイデアにあふれている",
    ],
    advice: [
        "忍耐力を養えばより大きな成功が得られる",
        "健康管理にもっと気を配ると良い",
        "新しい挑戦を恐れず積極的に取り組みましょう",
        "人間関係ではコミュニケーションをより大切に",
        "地道な努力が大きな実を結ぶでしょう",
    ],
};

// ---------------------------------------------------------------------------
// Spanish
// ---------------------------------------------------------------------------

static ES_TEMPLATES: TemplateSet = TemplateSet {
    love: [
        "Tiene una línea del corazón profunda y estable. Es muy probable que encuentre un amor verdadero y halle la felicidad en una relación duradera.",
        "Muestra una naturaleza emocional rica y romántica. Vivirá un amor apasionado y dejará una huella profunda en su pareja.",
        "Tiene un estilo de amor prudente y sincero. Encontrará la verdadera felicidad en una relación que se desarrolla poco a poco.",
    ],
    money: [
        "Es del tipo que acumula riqueza con esfuerzo constante. Es más probable que construya un patrimonio estable ahorrando que invirtiendo.",
        "Tiene talento para los negocios y la inversión. Le conviene buscar rendimientos estables en lugar de grandes riesgos.",
        "Tiene una capacidad excelente para administrar sus finanzas. El gasto y la inversión planificados harán crecer su patrimonio de forma constante.",
    ],
    health: [
        "Su línea de la vida muestra una vitalidad muy fuerte. Si mantiene hábitos saludables, vivirá una vida larga y llena de energía.",
        "En general goza de buena salud, pero la gestión del estrés es importante. Se recomiendan descanso suficiente y ejercicio regular.",
        "Tiene buena resistencia física y se recupera rápido. Los chequeos médicos regulares le ayudarán a mantener una vida aún más sana.",
    ],
    features: [
        "Emocionalmente rico y con un sentido artístico sobresaliente",
        "Excelente pensamiento lógico y capacidad de análisis",
        "Gran liderazgo y mucha determinación",
        "Intuición aguda y juicio certero",
        "Lleno de ideas creativas y originales",
    ],
    advice: [
        "Cultivar la paciencia le traerá un éxito mayor",
        "Sería prudente prestar más atención a su salud",
        "No tema los nuevos retos; afróntelos con decisión",
        "Valore más la comunicación en sus relaciones",
        "El esfuerzo constante dará grandes frutos",
    ],
};
