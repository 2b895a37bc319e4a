//! Built-in ZAP POST help catalog

use crate::model::{Article, Catalog, CategoryGroup, ContentPayload, Section};

/// Slug of the landing article
pub const HOME_SLUG: &str = "bem-vindo";

pub const CATEGORY_INTRO: &str = "Introdução";
pub const CATEGORY_FEATURES: &str = "Funcionalidades";
pub const CATEGORY_SETTINGS: &str = "Configurações";
pub const CATEGORY_SUPPORT: &str = "Suporte";

const LIST: &str = "list-disc pl-6 space-y-1";
const STEPS: &str = "list-decimal pl-6 space-y-1";

fn text(s: &str) -> ContentPayload {
    ContentPayload::text(s)
}

fn strong(s: &str) -> ContentPayload {
    ContentPayload::node("strong", vec![text(s)])
}

fn em(s: &str) -> ContentPayload {
    ContentPayload::node("em", vec![text(s)])
}

fn p(children: Vec<ContentPayload>) -> ContentPayload {
    ContentPayload::node("p", children)
}

fn li(children: Vec<ContentPayload>) -> ContentPayload {
    ContentPayload::node("li", children)
}

fn items(lines: &[&str]) -> Vec<ContentPayload> {
    lines.iter().map(|line| li(vec![text(line)])).collect()
}

fn bullets(lines: &[&str]) -> ContentPayload {
    ContentPayload::styled("ul", LIST, items(lines))
}

fn steps(lines: &[&str]) -> ContentPayload {
    ContentPayload::styled("ol", STEPS, items(lines))
}

fn div(children: Vec<ContentPayload>) -> ContentPayload {
    ContentPayload::node("div", children)
}

/// The complete ZAP POST catalog in display order
pub fn zap_post_catalog() -> Catalog {
    Catalog::new()
        .add_article(welcome())
        .add_article(dashboard())
        .add_article(credits_and_actions())
        .add_article(posts())
        .add_article(scripts())
        .add_article(carousels())
        .add_article(ideas())
        .add_article(profile())
        .add_article(whatsapp())
        .add_article(tips())
        .add_article(faq())
        .add_article(troubleshooting())
        .add_article(support())
        .add_category(CategoryGroup::new(
            CATEGORY_INTRO,
            ["bem-vindo", "dashboard", "creditos-e-acoes"],
        ))
        .add_category(CategoryGroup::new(
            CATEGORY_FEATURES,
            [
                "posts-legendas",
                "roteiros",
                "carrosseis",
                "ideias-criativas",
                "envio-whatsapp",
                "dicas-truques",
            ],
        ))
        .add_category(CategoryGroup::new(
            CATEGORY_SETTINGS,
            ["perfil-configuracoes"],
        ))
        .add_category(CategoryGroup::new(
            CATEGORY_SUPPORT,
            ["perguntas-frequentes", "solucao-de-problemas", "suporte"],
        ))
}

fn welcome() -> Article {
    Article::new(HOME_SLUG, "Bem-vindo ao ZAP POST", CATEGORY_INTRO)
        .with_summary("Guia inicial e visão geral do sistema.")
        .add_info("Acesso", "Dashboard após login")
        .add_info("Módulos", "Posts, Roteiros, Carrosséis, Ideias")
        .add_info("Envio", "WhatsApp integrado")
        .add_section(Section::new(
            "sua-jornada",
            "Sua jornada começa aqui",
            div(vec![
                p(vec![
                    text("Sua jornada para posts incríveis começa aqui! Este é o seu guia completo para usar o "),
                    strong("ZAP POST"),
                    text(". Vamos transformar suas ideias em conteúdo profissional, passo a passo."),
                ]),
                ContentPayload::styled(
                    "p",
                    "mt-2",
                    vec![text(
                        "Se você já se sentiu sem tempo, sem criatividade ou perdido sobre o que postar nas redes sociais, o ZAP POST foi feito para você. Pense nele como seu assistente pessoal de marketing.",
                    )],
                ),
                bullets(&[
                    "Economize tempo: crie em minutos o que levaria horas.",
                    "Nunca mais bloqueio criativo: ideias infinitas e gratuitas.",
                    "Visual profissional: textos e imagens de alta qualidade.",
                    "Mais engajamento: conteúdo pensado para gerar interação.",
                ]),
            ]),
        ))
        .add_section(Section::new(
            "como-funciona",
            "Como funciona (fluxo simplificado)",
            steps(&[
                "Acesse o Dashboard e escolha o módulo (Posts, Roteiros, Carrosséis ou Ideias).",
                "Descreva o tema, o público e o objetivo.",
                "Gere o conteúdo e ajuste o que for necessário.",
                "Consumo de recursos: ⚡ ações (diárias) e 💎 créditos (quando preciso).",
                "Copie, baixe ou encaminhe diretamente ao WhatsApp.",
            ]),
        ))
        .add_section(Section::new(
            "dica-ouro",
            "Dica de ouro: pedidos específicos",
            div(vec![
                p(vec![text("O segredo de um bom resultado é ser específico no pedido.")]),
                bullets(&[
                    "❌ Pedido genérico: “Post sobre marketing”.",
                    "✅ Pedido excelente: “Crie um post com 5 dicas de marketing digital para donos de pequenas lojas de roupa que querem vender mais pelo Instagram”.",
                ]),
            ]),
        ))
        .with_see_also(["dashboard", "creditos-e-acoes"])
}

fn dashboard() -> Article {
    Article::new("dashboard", "Entendendo o Dashboard", CATEGORY_INTRO)
        .with_summary("Mapa da tela inicial e sua central de comando.")
        .add_info("Topo", "⚡ ações, 💎 créditos, notificações")
        .add_info("Menu", "Acesso a módulos e Perfil")
        .add_section(Section::new(
            "central",
            "Sua central de comando",
            div(vec![
                p(vec![text(
                    "Ao entrar no ZAP POST, a primeira tela é o Dashboard. Pense nele como o painel do seu carro: mostra tudo o que você precisa saber de forma rápida.",
                )]),
                ContentPayload::styled(
                    "ol",
                    STEPS,
                    vec![
                        li(vec![strong("Menu Lateral"), text(" (esquerda): mapa para navegar entre ferramentas.")]),
                        li(vec![strong("Header Superior"), text(" (topo): saldos de ⚡ ações e 💎 créditos.")]),
                        li(vec![strong("Ações Rápidas"), text(" (centro): atalhos para criação.")]),
                    ],
                ),
            ]),
        ))
        .add_section(Section::new(
            "dicas",
            "Dicas de uso inteligente",
            bullets(&[
                "Planeje o dia com base nas ⚡ ações disponíveis.",
                "Use atalhos rápidos para economizar tempo.",
                "Verifique notificações para novidades e alertas.",
            ]),
        ))
        .with_see_also(["creditos-e-acoes"])
}

fn credits_and_actions() -> Article {
    Article::new("creditos-e-acoes", "Sistema de ⚡ Ações e 💎 Créditos", CATEGORY_INTRO)
        .with_summary("Suas moedas para criar: o que renova e o que é sob demanda.")
        .add_info("Renovação", "⚡ resetam diariamente (não acumulam)")
        .add_info("Uso premium", "💎 habilitam recursos extras")
        .add_section(Section::new(
            "carteiras",
            "Duas carteiras, dois usos",
            div(vec![
                p(vec![text("Pense que você tem duas carteiras para “pagar” suas criações:")]),
                ContentPayload::styled(
                    "ul",
                    LIST,
                    vec![
                        li(vec![strong("⚡ Ações Diárias:"), text(" renovam à meia-noite, não acumulam.")]),
                        li(vec![
                            strong("💎 Créditos:"),
                            text(" recursos premium (ex.: imagens IA). Podem ser adquiridos e não expiram."),
                        ]),
                    ],
                ),
            ]),
        ))
        .add_section(Section::new(
            "cenario",
            "Cenário prático (como funciona no dia a dia)",
            div(vec![
                p(vec![text("Exemplo:")]),
                bullets(&[
                    "Post Simples (texto): 1 ⚡ → saldo ajustado.",
                    "Post com Imagem IA: 1 ⚡ + 30 💎 → saldo ajustado.",
                    "Ideias Criativas: grátis (sem custo de ⚡ ou 💎).",
                ]),
                p(vec![text(
                    "O sistema prioriza usar ⚡ ações quando possível, para economizar seus 💎.",
                )]),
            ]),
        ))
        .with_see_also(["posts-legendas", "carrosseis"])
}

fn posts() -> Article {
    Article::new("posts-legendas", "Posts & Legendas", CATEGORY_FEATURES)
        .with_summary("Crie posts em texto, com imagem IA ou usando sua própria imagem.")
        .add_info("Acesso", "Menu › Posts & Legendas")
        .add_info("Modalidades", "Texto | +Imagem IA | Sua imagem")
        .add_section(Section::new(
            "intro",
            "Introdução",
            p(vec![text(
                "Aqui é onde a mágica acontece. Você tem 3 opções de criação pensadas para necessidades diferentes: apenas texto, texto + imagem gerada por IA, ou texto otimizado a partir de uma imagem sua.",
            )]),
        ))
        .add_section(Section::new(
            "passo-a-passo",
            "Guia: seu primeiro post (+ Imagem IA)",
            ContentPayload::styled(
                "ol",
                STEPS,
                vec![
                    li(vec![text(
                        "Descreva seu post (público, objetivo, tema). Ex.: “benefícios do café para programadores, tom bem-humorado”.",
                    )]),
                    li(vec![text("Escolha o Estilo da Imagem (ex.: Foto realista, Ilustração 3D).")]),
                    li(vec![text("Clique em "), strong("Gerar Conteúdo"), text(" e aguarde.")]),
                    li(vec![
                        text("Use "),
                        strong("Copiar"),
                        text(", "),
                        strong("Download"),
                        text(" ou "),
                        strong("Enviar via WhatsApp"),
                        text("."),
                    ]),
                ],
            ),
        ))
        .add_section(Section::new(
            "dica-briefing",
            "Dica de ouro (especificidade)",
            bullets(&[
                "❌ “Post sobre marketing”.",
                "✅ “Post com 5 dicas de marketing para pequenas lojas de roupa que querem vender mais no Instagram”.",
            ]),
        ))
        .with_see_also(["envio-whatsapp", "perfil-configuracoes", "ideias-criativas"])
}

fn scripts() -> Article {
    Article::new("roteiros", "Roteiros para Vídeos", CATEGORY_FEATURES)
        .with_summary("Estruturas prontas para Reels, TikTok e Shorts.")
        .add_section(Section::new(
            "estrutura",
            "A estrutura secreta de vídeos virais",
            ContentPayload::styled(
                "ol",
                STEPS,
                vec![
                    li(vec![strong("Hook"), text(" (0–3s): frase polêmica/pergunta curiosa para parar o scroll.")]),
                    li(vec![strong("Desenvolvimento"), text(": entregue as dicas e o passo a passo com clareza.")]),
                    li(vec![strong("CTA"), text(": diga explicitamente a ação desejada (seguir, comentar, salvar).")]),
                ],
            ),
        ))
        .add_section(Section::new(
            "como-usar",
            "Como usar",
            steps(&[
                "Informe o tema e a plataforma.",
                "Gere o roteiro e ajuste o tom.",
                "Copie/baixe e publique.",
            ]),
        ))
        .with_see_also(["posts-legendas"])
}

fn carousels() -> Article {
    Article::new("carrosseis", "Carrosséis", CATEGORY_FEATURES)
        .with_summary("Eduque e venda com posts de múltiplos slides.")
        .add_section(Section::new(
            "conceito",
            "Por que usar carrosséis",
            div(vec![p(vec![text(
                "Carrosséis são excelentes para ensinar e aprofundar um tema. O Instagram costuma favorecer esse formato e, em muitos nichos, o engajamento é superior ao de posts simples.",
            )])]),
        ))
        .add_section(Section::new(
            "custos",
            "Atenção ao custo das imagens",
            div(vec![
                p(vec![text(
                    "Carrossel só com texto: 1 ⚡. Ao gerar imagens IA por slide, há custo adicional de 30 💎 por slide.",
                )]),
                ContentPayload::styled(
                    "p",
                    "mt-1",
                    vec![text("Ex.: 5 slides com imagens = 1 ⚡ + 150 💎.")],
                ),
            ]),
        ))
        .add_section(Section::new(
            "passos",
            "Passo a passo",
            steps(&[
                "Defina tema, objetivo e nº de slides.",
                "Escolha usar ou não imagens IA por slide.",
                "Gere, revise e exporte.",
            ]),
        ))
        .with_see_also(["creditos-e-acoes"])
}

fn ideas() -> Article {
    Article::new("ideias-criativas", "Ideias Criativas", CATEGORY_FEATURES)
        .with_summary("O fim do bloqueio criativo — ferramenta 100% gratuita.")
        .add_section(Section::new(
            "intro",
            "Como usar de forma inteligente",
            ContentPayload::styled(
                "ol",
                STEPS,
                vec![
                    li(vec![text("Gere ideias para obter o “tema da redação”.")]),
                    li(vec![text("Selecione a ideia mais promissora.")]),
                    li(vec![text("Vá para "), em("Posts & Legendas"), text(" ou "), em("Roteiros"), text(".")]),
                    li(vec![text("Cole a ideia escolhida e peça o desenvolvimento completo.")]),
                ],
            ),
        ))
        .add_section(Section::new(
            "boas-praticas",
            "Boas práticas",
            bullets(&[
                "Crie um banco de ideias semanal.",
                "Agrupe ideias por temas/séries para facilitar produção.",
            ]),
        ))
        .with_see_also(["posts-legendas", "roteiros", "carrosseis"])
}

fn profile() -> Article {
    Article::new("perfil-configuracoes", "Perfil e Configurações", CATEGORY_SETTINGS)
        .with_summary("Ensine a IA a falar como você para resultados melhores.")
        .add_info("Impacto", "Personalização melhora resultados")
        .add_section(Section::new(
            "campos",
            "O que preencher em cada campo",
            div(vec![
                p(vec![
                    strong("Público-alvo"),
                    text(": detalhe quem compra de você (idade, interesses, dores)."),
                ]),
                p(vec![
                    strong("Tom de comunicação"),
                    text(": defina o estilo (profissional, acessível, divertido etc.)."),
                ]),
                p(vec![
                    strong("Temas de interesse / Temas proibidos"),
                    text(": diga o que abordar e o que evitar."),
                ]),
            ]),
        ))
        .add_section(Section::new(
            "beneficios",
            "Por que isso importa",
            p(vec![text(
                "Um perfil bem preenchido é a diferença entre um conteúdo “ok” e um “UAU, parece que foi eu que escrevi!”.",
            )]),
        ))
        .with_see_also(["posts-legendas", "ideias-criativas"])
}

fn whatsapp() -> Article {
    Article::new("envio-whatsapp", "Envio para WhatsApp", CATEGORY_FEATURES)
        .with_summary("Receba tudo no WhatsApp para publicar do celular.")
        .add_section(Section::new(
            "por-que",
            "Por que isso é útil",
            bullets(&[
                "Agilidade: copie e cole direto nas redes.",
                "Backup: mantenha um histórico das criações.",
                "Equipe: encaminhe para sócios/clientes aprovarem.",
            ]),
        ))
        .add_section(Section::new(
            "config",
            "Como configurar (uma vez)",
            ContentPayload::styled(
                "ol",
                STEPS,
                vec![
                    li(vec![text("Acesse "), em("👤 Perfil"), text(".")]),
                    li(vec![text("Informe seu número com DDD e DDI +55 (Brasil).")]),
                    li(vec![text("Salve. Pronto!")]),
                ],
            ),
        ))
        .with_see_also(["posts-legendas"])
}

fn tips() -> Article {
    Article::new("dicas-truques", "Dicas e Truques", CATEGORY_FEATURES)
        .with_summary("Qualidade, economia de 💎 e produtividade.")
        .add_section(Section::new(
            "regra-80-20",
            "A Regra do 80/20",
            p(vec![text(
                "Para cada 10 posts, faça 8 de valor (educar/entreter) e 2 de venda direta. Isso cria confiança e melhora conversão.",
            )]),
        ))
        .add_section(Section::new(
            "reutilizacao",
            "Reutilização inteligente",
            div(vec![
                p(vec![text("Trabalhe uma vez, aproveite várias:")]),
                bullets(&[
                    "Seg: Post com 5 dicas rápidas.",
                    "Ter: Reel com tour/mostra rápida.",
                    "Qua: Carrossel com passo a passo detalhado.",
                    "Qui: Stories com enquetes de “antes e depois”.",
                ]),
            ]),
        ))
        .with_see_also(["ideias-criativas", "carrosseis"])
}

fn faq() -> Article {
    Article::new("perguntas-frequentes", "Perguntas Frequentes (FAQ)", CATEGORY_SUPPORT)
        .with_summary("As dúvidas mais comuns, direto ao ponto.")
        .add_section(Section::new(
            "acoes-acumulam",
            "As ações diárias (⚡) acumulam?",
            p(vec![text(
                "Não. Pense nelas como um prato feito diário. Se não usar hoje, amanhã você recebe um novo, não dois. Use suas ⚡ para aproveitar ao máximo!",
            )]),
        ))
        .add_section(Section::new(
            "perdi-creditos",
            "Não gostei do conteúdo. Perdi meus 💎 créditos?",
            p(vec![text(
                "O consumo (⚡/💎) ocorre na geração. Se o resultado não ficou bom, refine o pedido: seja mais específico, detalhe o público e o objetivo, e mantenha o Perfil completo.",
            )]),
        ))
        .add_section(Section::new(
            "editar",
            "Posso editar o texto gerado?",
            p(vec![text(
                "Sim — e deve! A IA entrega a base (90% do trabalho). Os 10% finais são seu toque: histórias, vocabulário, emojis. Isso dá autenticidade.",
            )]),
        ))
        .with_see_also(["solucao-de-problemas", "suporte"])
}

fn troubleshooting() -> Article {
    Article::new("solucao-de-problemas", "Solução de Problemas", CATEGORY_SUPPORT)
        .with_summary("Login, travamentos e WhatsApp.")
        .add_section(Section::new(
            "login",
            "Não consigo fazer login",
            bullets(&[
                "Revise e-mail/senha (atenção a espaços extras).",
                "Use “Esqueci minha senha” e siga o e-mail recebido.",
                "Tente aba anônima ou outro navegador.",
            ]),
        ))
        .add_section(Section::new(
            "travou",
            "A página travou/botão não funciona",
            div(vec![p(vec![text(
                "Recarregar (F5) resolve a maioria dos casos — limpa falhas de carregamento.",
            )])]),
        ))
}

fn support() -> Article {
    Article::new("suporte", "Suporte", CATEGORY_SUPPORT)
        .with_summary("Canais oficiais de atendimento.")
        .add_info("WhatsApp", "+55 (54) 9639-6455")
        .add_info("E-mail", "atendimento@zappost.app")
        .add_section(Section::new(
            "contatos",
            "Contatos",
            ContentPayload::styled(
                "div",
                "space-y-2",
                vec![
                    p(vec![strong("Suporte WhatsApp:"), text(" +55 (54) 9639-6455")]),
                    p(vec![strong("Suporte E-mail:"), text(" atendimento@zappost.app")]),
                ],
            ),
        ))
        .add_section(Section::new(
            "boas-praticas",
            "Boas práticas ao solicitar suporte",
            bullets(&[
                "Explique o problema e o que já tentou.",
                "Inclua prints e horário aproximado do erro.",
                "Informe seus saldos de ⚡/💎 e qual recurso estava usando.",
            ]),
        ))
}
