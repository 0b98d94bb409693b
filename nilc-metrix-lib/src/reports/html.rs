use crate::Result;
use crate::metrics::Catalog;
use crate::ranking::RankedSentence;
use crate::results::ResultSet;
use core::fmt::Write;

/// Content of a page that runs the metric pipeline over a submitted text.
#[derive(Debug, Clone, Copy)]
pub struct MetricsPage<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,

    /// Path the form posts back to.
    pub action: &'a str,
    pub text: &'a str,
    pub message: Option<&'a str>,
    pub results: Option<&'a ResultSet>,
}

/// Content of the sentence ranking page.
#[derive(Debug, Clone, Copy)]
pub struct RankingPage<'a> {
    pub action: &'a str,
    pub text: &'a str,
    pub message: Option<&'a str>,
    pub sentences: Option<&'a [RankedSentence]>,
}

const TOOLS: &[(&str, &str, &str)] = &[
    (
        "/nilcmetrix",
        "NILC-Metrix",
        "Todas as métricas de complexidade textual, agrupadas por categoria.",
    ),
    (
        "/cohmetrixport",
        "Coh-Metrix-Port",
        "As métricas do Coh-Metrix-Port para textos em português.",
    ),
    (
        "/simpligo-ranking",
        "Simpligo Ranking",
        "Dificuldade de leitura de cada sentença do texto.",
    ),
    ("/metrixdoc", "Documentação", "Descrição de cada métrica disponível."),
];

pub fn generate_index<W: Write>(writer: &mut W) -> Result<()> {
    write_page_start(writer, "NILC-Metrix")?;
    write_header(writer, "NILC-Metrix", "Métricas de complexidade textual para o português")?;

    writeln!(writer, "  <div class=\"tools\">")?;
    for (path, name, description) in TOOLS {
        writeln!(writer, "    <a class=\"tool-card\" href=\"{path}\">")?;
        writeln!(writer, "      <div class=\"tool-name\">{name}</div>")?;
        writeln!(writer, "      <div class=\"tool-description\">{description}</div>")?;
        writeln!(writer, "    </a>")?;
    }
    writeln!(writer, "  </div>")?;

    write_page_end(writer)
}

/// Documents every metric of the catalog, grouped by class.
pub fn generate_metric_doc<W: Write>(catalog: &Catalog, writer: &mut W) -> Result<()> {
    write_page_start(writer, "Documentação das métricas")?;
    write_header(
        writer,
        "Documentação das métricas",
        &format!("{} métricas, catálogo {}", catalog.len(), catalog.version()),
    )?;

    for (class, defs) in catalog.group_by_class() {
        writeln!(writer, "  <div class=\"card\">")?;
        writeln!(writer, "    <div class=\"card-section-title\">{}</div>", html_escape(class))?;
        writeln!(writer, "    <table>")?;
        writeln!(writer, "      <tr><th>Métrica</th><th>Fonte</th><th>Nível</th><th>Descrição</th></tr>")?;
        for def in defs {
            let level = def.level.map_or("", <&'static str>::from);
            writeln!(
                writer,
                "      <tr><td><code>{}</code></td><td title=\"{}\">{}</td><td>{level}</td><td>{}</td></tr>",
                html_escape(def.key),
                def.source.family_name(),
                def.source,
                html_escape(def.description)
            )?;
        }
        writeln!(writer, "    </table>")?;
        writeln!(writer, "  </div>")?;
    }

    write_page_end(writer)
}

pub fn generate_metrics_page<W: Write>(page: &MetricsPage<'_>, writer: &mut W) -> Result<()> {
    write_page_start(writer, page.title)?;
    write_header(writer, page.title, page.subtitle)?;
    write_form(writer, page.action, page.text)?;
    write_message(writer, page.message)?;

    if let Some(results) = page.results {
        writeln!(writer, "  <div class=\"card\">")?;
        writeln!(writer, "    <table id=\"results\">")?;
        writeln!(writer, "      <tr><th>#</th><th>Categoria</th><th>Métrica</th><th>Valor</th><th>Descrição</th></tr>")?;
        for item in results {
            writeln!(
                writer,
                "      <tr><td>{}</td><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
                item.index,
                html_escape(item.class()),
                html_escape(&item.key),
                html_escape(&item.value),
                html_escape(item.description())
            )?;
        }
        writeln!(writer, "    </table>")?;
        writeln!(writer, "  </div>")?;
    }

    write_page_end(writer)
}

pub fn generate_ranking_page<W: Write>(page: &RankingPage<'_>, writer: &mut W) -> Result<()> {
    write_page_start(writer, "Simpligo Ranking")?;
    write_header(writer, "Simpligo Ranking", "Dificuldade de leitura por sentença")?;
    write_form(writer, page.action, page.text)?;
    write_message(writer, page.message)?;

    if let Some(sentences) = page.sentences {
        writeln!(writer, "  <div class=\"card\">")?;
        writeln!(writer, "    <table id=\"results\">")?;
        writeln!(writer, "      <tr><th>#</th><th>Sentença</th><th>Dificuldade</th></tr>")?;
        for ranked in sentences {
            writeln!(
                writer,
                "      <tr><td>{}</td><td>{}</td><td><span class=\"difficulty\" style=\"background: {}\">{}%</span></td></tr>",
                ranked.index,
                html_escape(&ranked.sentence),
                ranked.difficulty.band.color(),
                ranked.difficulty.percent
            )?;
        }
        writeln!(writer, "    </table>")?;
        writeln!(writer, "  </div>")?;
    }

    write_page_end(writer)
}

fn write_page_start<W: Write>(writer: &mut W, title: &str) -> Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"pt-BR\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "  <meta charset=\"UTF-8\">")?;
    writeln!(writer, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(writer, "  <title>{}</title>", html_escape(title))?;
    write_styles(writer)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    Ok(())
}

fn write_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    :root {{")?;
    writeln!(writer, "      --bg-color: #f0f2f5;")?;
    writeln!(writer, "      --card-bg: #ffffff;")?;
    writeln!(writer, "      --text-color: #1a202c;")?;
    writeln!(writer, "      --text-secondary: #64748b;")?;
    writeln!(writer, "      --border-color: #e2e8f0;")?;
    writeln!(writer, "      --category-bg: #e0e7ff;")?;
    writeln!(writer, "      --category-text: #334191;")?;
    writeln!(writer, "      --hover-bg: #f8fafc;")?;
    writeln!(writer, "      --accent-color: #4764a0;")?;
    writeln!(writer, "      --shadow: 0 1px 3px rgba(0,0,0,0.08), 0 4px 16px rgba(0,0,0,0.04);")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    body.dark-theme {{")?;
    writeln!(writer, "      --bg-color: #0f172a; --card-bg: #1e293b; --text-color: #e2e8f0; --text-secondary: #94a3b8;")?;
    writeln!(writer, "      --border-color: #334155; --category-bg: #1e1b4b; --category-text: #a5b4fc;")?;
    writeln!(writer, "      --hover-bg: #263044; --accent-color: #718fc8;")?;
    writeln!(writer, "      --shadow: 0 1px 3px rgba(0,0,0,0.3), 0 4px 16px rgba(0,0,0,0.2);")?;
    writeln!(writer, "      color-scheme: dark;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    * {{ box-sizing: border-box; }}")?;
    writeln!(writer, "    body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; padding: 32px; background: var(--bg-color); color: var(--text-color); line-height: 1.5; }}")?;
    writeln!(writer, "    .header {{ display: flex; align-items: center; gap: 16px; margin-bottom: 28px; }}")?;
    writeln!(writer, "    .header-content {{ flex: 1; }}")?;
    writeln!(writer, "    h1 {{ margin: 0 0 2px 0; font-size: 26px; font-weight: 700; letter-spacing: -0.5px; }}")?;
    writeln!(writer, "    .subtitle {{ margin: 0; font-size: 13px; color: var(--text-secondary); }}")?;
    writeln!(writer, "    .theme-toggle {{ background: none; border: 2px solid var(--border-color); border-radius: 8px; width: 40px; height: 40px; cursor: pointer; }}")?;
    writeln!(writer, "    .tools {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 12px; }}")?;
    writeln!(writer, "    .tool-card {{ background: var(--card-bg); border-radius: 10px; padding: 16px 20px; box-shadow: var(--shadow); border: 1px solid var(--border-color); color: var(--text-color); }}")?;
    writeln!(writer, "    .tool-name {{ font-size: 18px; font-weight: 700; color: var(--accent-color); }}")?;
    writeln!(writer, "    .tool-description {{ font-size: 13px; color: var(--text-secondary); }}")?;
    writeln!(writer, "    .card {{ background: var(--card-bg); border-radius: 12px; box-shadow: var(--shadow); border: 1px solid var(--border-color); margin-bottom: 20px; overflow: hidden; }}")?;
    writeln!(writer, "    .card-section-title {{ font-size: 11px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.8px; color: var(--category-text); background: var(--category-bg); padding: 8px 20px; }}")?;
    writeln!(writer, "    form {{ margin-bottom: 20px; }}")?;
    writeln!(writer, "    textarea {{ width: 100%; min-height: 200px; padding: 12px; font: inherit; border-radius: 8px; border: 1px solid var(--border-color); background: var(--card-bg); color: var(--text-color); }}")?;
    writeln!(writer, "    button[type=submit] {{ margin-top: 8px; padding: 8px 24px; border: none; border-radius: 8px; background: var(--accent-color); color: #ffffff; font-weight: 600; cursor: pointer; }}")?;
    writeln!(writer, "    .message {{ padding: 12px 20px; border-radius: 8px; border-left: 4px solid #dc2626; background: var(--card-bg); margin-bottom: 20px; }}")?;
    writeln!(writer, "    table {{ border-collapse: collapse; width: 100%; }}")?;
    writeln!(writer, "    th {{ text-align: left; padding: 8px 20px; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; color: var(--text-secondary); border-bottom: 2px solid var(--border-color); }}")?;
    writeln!(writer, "    td {{ padding: 8px 20px; font-size: 14px; border-bottom: 1px solid var(--border-color); vertical-align: top; }}")?;
    writeln!(writer, "    tr:last-child td {{ border-bottom: none; }}")?;
    writeln!(writer, "    tr:hover td {{ background: var(--hover-bg); }}")?;
    writeln!(writer, "    .difficulty {{ display: inline-block; min-width: 48px; padding: 2px 10px; border-radius: 4px; color: #ffffff; font-weight: 600; text-align: center; }}")?;
    writeln!(writer, "    a {{ color: var(--accent-color); text-decoration: none; }}")?;
    writeln!(writer, "    @media (max-width: 640px) {{ body {{ padding: 16px; }} }}")?;
    writeln!(writer, "  </style>")?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, title: &str, subtitle: &str) -> Result<()> {
    writeln!(writer, "  <div class=\"header\">")?;
    writeln!(writer, "    <div class=\"header-content\">")?;
    writeln!(writer, "      <h1><a href=\"/\">{}</a></h1>", html_escape(title))?;
    writeln!(writer, "      <p class=\"subtitle\">{}</p>", html_escape(subtitle))?;
    writeln!(writer, "    </div>")?;
    writeln!(writer, "    <button class=\"theme-toggle\" onclick=\"toggleTheme()\" aria-label=\"Alternar tema\">&#9680;</button>")?;
    writeln!(writer, "  </div>")?;
    Ok(())
}

fn write_form<W: Write>(writer: &mut W, action: &str, text: &str) -> Result<()> {
    writeln!(writer, "  <form method=\"post\" action=\"{action}\">")?;
    writeln!(writer, "    <textarea name=\"text\" placeholder=\"Digite ou cole o texto aqui\">{}</textarea>", html_escape(text))?;
    writeln!(writer, "    <button type=\"submit\">Analisar</button>")?;
    writeln!(writer, "  </form>")?;
    Ok(())
}

fn write_message<W: Write>(writer: &mut W, message: Option<&str>) -> Result<()> {
    if let Some(message) = message {
        writeln!(writer, "  <div class=\"message\">{}</div>", html_escape(message))?;
    }
    Ok(())
}

fn write_page_end<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <script>")?;
    writeln!(writer, "    function applyTheme(theme) {{")?;
    writeln!(writer, "      document.body.classList.remove('dark-theme', 'light-theme');")?;
    writeln!(writer, "      document.body.classList.add(theme + '-theme');")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    function toggleTheme() {{")?;
    writeln!(writer, "      const current = localStorage.getItem('theme') || 'light';")?;
    writeln!(writer, "      const next = current === 'dark' ? 'light' : 'dark';")?;
    writeln!(writer, "      localStorage.setItem('theme', next);")?;
    writeln!(writer, "      applyTheme(next);")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    applyTheme(localStorage.getItem('theme') || 'light');")?;
    writeln!(writer, "  </script>")?;
    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
