//! Static interactive HTML page for a state set
//!
//! The page is fully self-contained: styles, the state cards, and the
//! search/filter script are embedded, so the file can be opened directly in
//! a browser with no server behind it.

use std::path::Path;

use super::document::StateSetDocument;
use crate::Result;

const STYLE: &str = r#"
    body {
      font-family: Arial, sans-serif;
      margin: 20px;
      background-color: #f5f5f5;
    }
    h1 {
      color: #333;
    }
    .stats {
      margin-bottom: 20px;
      padding: 15px;
      background-color: white;
      border-radius: 8px;
      box-shadow: 0 2px 5px rgba(0,0,0,0.1);
    }
    .search-container {
      margin-bottom: 20px;
    }
    #boardSearch {
      padding: 8px;
      width: 300px;
      border: 1px solid #ddd;
      border-radius: 4px;
    }
    .filters {
      margin-bottom: 20px;
    }
    .filter-btn {
      margin-right: 10px;
      padding: 5px 10px;
      background-color: #f0f0f0;
      border: 1px solid #ddd;
      border-radius: 4px;
      cursor: pointer;
    }
    .filter-btn.active {
      background-color: #3498db;
      color: white;
    }
    .board-container {
      display: flex;
      flex-wrap: wrap;
      gap: 20px;
      margin-bottom: 30px;
    }
    .board-wrapper {
      background-color: white;
      border-radius: 8px;
      padding: 15px;
      box-shadow: 0 2px 5px rgba(0,0,0,0.1);
      width: 180px;
    }
    .board {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      grid-template-rows: repeat(3, 1fr);
      gap: 2px;
      width: 150px;
      height: 150px;
      margin: 0 auto;
      background-color: #333;
    }
    .cell {
      background-color: white;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 24px;
      font-weight: bold;
    }
    .cell-empty { color: #aaa; }
    .cell-x { color: #e74c3c; }
    .cell-o { color: #3498db; }
    .board-id {
      text-align: center;
      margin-top: 10px;
      font-weight: bold;
    }
    .transitions {
      font-size: 12px;
      margin-top: 5px;
      text-align: center;
      color: #666;
      height: 40px;
      overflow-y: auto;
    }
  "#;

const SCRIPT: &str = r#"
    document.getElementById('boardSearch').addEventListener('input', function() {
      const searchValue = this.value.trim();
      const boardWrappers = document.querySelectorAll('.board-wrapper');

      boardWrappers.forEach(wrapper => {
        const boardId = wrapper.getAttribute('data-id');
        if (searchValue === '' || boardId.includes(searchValue)) {
          wrapper.style.display = 'block';
        } else {
          wrapper.style.display = 'none';
        }
      });
    });

    const filterButtons = document.querySelectorAll('.filter-btn');
    filterButtons.forEach(button => {
      button.addEventListener('click', function() {
        filterButtons.forEach(btn => btn.classList.remove('active'));
        this.classList.add('active');

        const filter = this.getAttribute('data-filter');
        const boardWrappers = document.querySelectorAll('.board-wrapper');

        boardWrappers.forEach(wrapper => {
          if (filter === 'all' || wrapper.getAttribute('data-filter') === filter) {
            wrapper.style.display = 'block';
          } else {
            wrapper.style.display = 'none';
          }
        });
      });
    });
  "#;

/// Render a state set as a complete HTML page.
///
/// Every state becomes a card carrying its board grid, id, and outgoing
/// transitions, tagged with its status class so the filter buttons can show
/// one slice of the set at a time. The search box narrows cards by id.
pub fn render_page<Id: Copy + Into<u32>>(title: &str, set: &StateSetDocument<Id>) -> String {
    let mut page = String::with_capacity(set.states.len() * 640 + 8192);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"UTF-8\">\n");
    page.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    page.push_str(&format!("  <title>{title}</title>\n"));
    page.push_str("  <style>");
    page.push_str(STYLE);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(&format!("  <h1>{title}</h1>\n"));

    page.push_str("  <div class=\"stats\">\n");
    page.push_str(&format!(
        "    <p>Total board states: <strong>{}</strong></p>\n",
        set.count
    ));
    page.push_str(&format!(
        "    <p>Total transitions: <strong>{}</strong></p>\n",
        set.edge_count
    ));
    page.push_str("  </div>\n");

    page.push_str("  <div class=\"search-container\">\n");
    page.push_str("    <input type=\"text\" id=\"boardSearch\" placeholder=\"Search board by ID...\">\n");
    page.push_str("  </div>\n");

    page.push_str("  <div class=\"filters\">\n");
    page.push_str("    <button class=\"filter-btn active\" data-filter=\"all\">All States</button>\n");
    page.push_str("    <button class=\"filter-btn\" data-filter=\"x-turn\">X's Turn</button>\n");
    page.push_str("    <button class=\"filter-btn\" data-filter=\"o-turn\">O's Turn</button>\n");
    page.push_str("    <button class=\"filter-btn\" data-filter=\"x-win\">X Wins</button>\n");
    page.push_str("    <button class=\"filter-btn\" data-filter=\"o-win\">O Wins</button>\n");
    page.push_str("    <button class=\"filter-btn\" data-filter=\"draw\">Draw</button>\n");
    page.push_str("  </div>\n");

    page.push_str("  <div class=\"board-container\">\n");
    for (record, targets) in set.states.iter().zip(&set.edges) {
        let id: u32 = record.id.into();
        page.push_str(&format!(
            "    <div class=\"board-wrapper\" data-id=\"{id}\" data-filter=\"{}\">\n",
            record.status.as_str()
        ));

        page.push_str("      <div class=\"board\">\n");
        for c in record.board.chars() {
            let class = match c {
                'X' => "cell cell-x",
                'O' => "cell cell-o",
                _ => "cell cell-empty",
            };
            page.push_str(&format!("        <div class=\"{class}\">{c}</div>\n"));
        }
        page.push_str("      </div>\n");

        let targets_text = if targets.is_empty() {
            "None".to_string()
        } else {
            targets
                .iter()
                .map(|&t| {
                    let t: u32 = t.into();
                    t.to_string()
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        page.push_str(&format!("      <div class=\"board-id\">ID: {id}</div>\n"));
        page.push_str(&format!(
            "      <div class=\"transitions\">Transitions to: {targets_text}</div>\n"
        ));
        page.push_str("    </div>\n");
    }
    page.push_str("  </div>\n");

    page.push_str("  <script>");
    page.push_str(SCRIPT);
    page.push_str("</script>\n</body>\n</html>\n");

    page
}

/// Render a state set and write the page to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_html<Id, P>(title: &str, set: &StateSetDocument<Id>, path: P) -> Result<()>
where
    Id: Copy + Into<u32>,
    P: AsRef<Path>,
{
    std::fs::write(path, render_page(title, set))?;
    Ok(())
}
