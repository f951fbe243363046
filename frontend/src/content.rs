// Page copy. Kept apart from the components so sections stay readable.

pub const TESTIMONIAL_IMAGES: [&str; 6] = [
    "https://i.imgur.com/9i60L1M.jpeg",
    "https://i.imgur.com/Eb5eOKI.jpeg",
    "https://i.imgur.com/EINlKJb.png",
    "https://i.imgur.com/xv8vgRF.jpeg",
    "https://i.imgur.com/CVgweZN.jpeg",
    "https://i.imgur.com/4kmKtq9.jpeg",
];

pub const CHECKLIST_QUESTIONS: [&str; 4] = [
    "Sente que o violino é um instrumento difícil demais para aprender sozinho?",
    "Já tentou ver vídeos soltos na internet mas acabou ficando mais confuso?",
    "Tem medo de adquirir vícios de postura que prejudiquem sua evolução?",
    "Gostaria de tocar suas músicas favoritas mas não sabe por onde começar?",
];

pub const STUDY_PLAN_BENEFITS: [&str; 4] = [
    "Dominar a postura correta desde o primeiro dia",
    "Tocar suas primeiras músicas em tempo recorde",
    "Aprender sem depender de partitura ou conceitos chatos de teoria musical",
    "Aprender com um passo a passo bem estruturado e validado",
];

pub struct Phase {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const JOURNEY_PHASES: [Phase; 3] = [
    Phase {
        step: "Fase 1",
        title: "Fundamentos Elite",
        description: "Postura, empunhadura do arco e as primeiras notas com som limpo e cristalino.",
        icon: "📖",
    },
    Phase {
        step: "Fase 2",
        title: "Mecanismo Ativo",
        description: "Exercícios de agilidade para os dedos e coordenação motora avançada.",
        icon: "⚡",
    },
    Phase {
        step: "Fase 3",
        title: "Repertório",
        description: "Aplicação de toda técnica nas músicas que você sempre sonhou em tocar.",
        icon: "🌐",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub accent: &'static str,
    pub is_bonus: bool,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        icon: "🎻",
        title: "Método Passo a Passo",
        description: "Aulas direto ao ponto, sem enrolação, focadas no que realmente importa.",
        tag: "CONTEÚDO",
        accent: "#00FF88",
        is_bonus: false,
    },
    Feature {
        icon: "🎼",
        title: "MATERIAL DIDÁTICO",
        description: "Material em PDF para acompanhar cada aula e praticar em casa.",
        tag: "RECURSOS",
        accent: "#00D1FF",
        is_bonus: false,
    },
    Feature {
        icon: "🚀",
        title: "ATUALIZAÇÕES FUTURAS",
        description: "Compre hoje pelo valor atual e receba todas as atualizações sem custo adicional.",
        tag: "EXCLUSIVO",
        accent: "#00FF88",
        is_bonus: false,
    },
    Feature {
        icon: "🎁",
        title: "Bônus: Primeiros Hinos",
        description: "Módulo exclusivo ensinando hinos e músicas clássicas simples.",
        tag: "BÔNUS",
        accent: "#00D1FF",
        is_bonus: true,
    },
    Feature {
        icon: "⭐",
        title: "Bônus: Teoria Básica",
        description: "Tudo o que você precisa de teoria musical aplicado ao violino.",
        tag: "BÔNUS",
        accent: "#00FF88",
        is_bonus: true,
    },
];

pub const OFFER_ITEMS: [&str; 6] = [
    "Curso Violino do Zero",
    "Acesso Anual",
    "Material Didático (PDF)",
    "Atualizações Futuras",
    "Certificado de Conclusão",
    "Garantia de 7 Dias",
];

pub struct Price {
    pub original: &'static str,
    pub current: &'static str,
    pub installments: &'static str,
}

pub const PRICE: Price = Price {
    original: "De R$ 197,00",
    current: "R$ 37",
    installments: "ou 4x de R$ 10,07",
};

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Preciso ter o violino?",
        answer: "Sim, para praticar as aulas você precisará de um instrumento. No curso dou dicas de como escolher o seu primeiro violino.",
    },
    FaqEntry {
        question: "Nunca toquei nada, consigo?",
        answer: "Com certeza! O método foi desenhado especificamente para quem está saindo do zero absoluto ou para quem é iniciante.",
    },
    FaqEntry {
        question: "As aulas são ao vivo?",
        answer: "As aulas são gravadas em alta definição para você assistir quando e onde quiser, no seu ritmo.",
    },
    FaqEntry {
        question: "Por quanto tempo tenho acesso?",
        answer: "Seu acesso é anual. Pode ver e rever as aulas quantas vezes precisar dentro desse período.",
    },
];

pub const STUDENT_COUNT: &str = "+250 alunos";
pub const RATING: &str = "Nota 4.9/5 nas avaliações";

pub fn avatar_url(i: usize) -> String {
    format!("https://i.pravatar.cc/100?u=violinist-{}", i)
}
