use std::fmt;

use crate::presentation::formatters::{pad_to_width, truncate};
use crate::presentation::view_models::{
    CardViewModel, DetailViewModel, ExportResultViewModel, GridViewModel,
};

/// Character width of one grid column, gap included
const CARD_WIDTH: usize = 36;
const MAX_COLUMNS: usize = 4;

fn grid_header(f: &mut fmt::Formatter, model: &GridViewModel) -> fmt::Result {
    match &model.query {
        Some(query) => writeln!(
            f,
            "Users matching \"{}\": {} of {}",
            query,
            model.cards.len(),
            model.total
        ),
        None => writeln!(f, "Users: {}", model.total),
    }
}

fn card_lines(card: &CardViewModel) -> [String; 3] {
    [
        format!("#{} {}", card.number, card.name),
        card.email.clone(),
        format!("{}, {}", card.city, card.state),
    ]
}

/// Cards laid out in as many columns as fit
pub struct GridView<'a> {
    model: &'a GridViewModel,
    columns: usize,
}

impl<'a> GridView<'a> {
    pub fn new(model: &'a GridViewModel, columns: usize) -> Self {
        Self {
            model,
            columns: columns.clamp(1, MAX_COLUMNS),
        }
    }

    /// Column count from the width of the attached terminal, one when
    /// output is not a terminal
    pub fn fit_terminal(model: &'a GridViewModel) -> Self {
        let columns = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize / CARD_WIDTH)
            .unwrap_or(1);
        Self::new(model, columns)
    }
}

impl<'a> fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        grid_header(f, self.model)?;

        if let Some(placeholder) = &self.model.placeholder {
            writeln!(f)?;
            return writeln!(f, "{}", placeholder);
        }

        let cell_width = CARD_WIDTH - 2;
        for row in self.model.cards.chunks(self.columns) {
            writeln!(f)?;
            let cells: Vec<[String; 3]> = row.iter().map(card_lines).collect();

            for line in 0..3 {
                let text = cells
                    .iter()
                    .map(|cell| pad_to_width(&cell[line], cell_width))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(f, "{}", text.trim_end())?;
            }
        }

        Ok(())
    }
}

/// One line per card
pub struct CompactGridView<'a> {
    model: &'a GridViewModel,
}

impl<'a> CompactGridView<'a> {
    pub fn new(model: &'a GridViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for CompactGridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(placeholder) = &self.model.placeholder {
            return writeln!(f, "{}", placeholder);
        }

        for card in &self.model.cards {
            let line = format!(
                "{:<4} {}  {}  {}, {}",
                format!("#{}", card.number),
                pad_to_width(&card.name, 24),
                pad_to_width(&card.email, 36),
                card.city,
                card.state
            );
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

pub struct DetailView<'a> {
    model: &'a DetailViewModel,
}

impl<'a> DetailView<'a> {
    pub fn new(model: &'a DetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for DetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.model;

        writeln!(f, "#{} {} ({} of {})", m.number, m.name, m.position, m.of)?;
        writeln!(f, "  {}", m.email)?;
        writeln!(f, "  {}", m.city)?;
        writeln!(f, "  {}", "-".repeat(32))?;
        writeln!(f, "  {}", m.phone)?;
        writeln!(f, "  {}", m.address)?;
        writeln!(f, "  Birthday: {}", m.birthday)?;
        writeln!(f, "  Picture: {}", truncate(&m.picture, 72))?;
        writeln!(f)?;
        writeln!(f, "Prev: #{}  Next: #{}", m.prev_number, m.next_number)
    }
}

pub struct ExportResultView<'a> {
    model: &'a ExportResultViewModel,
}

impl<'a> ExportResultView<'a> {
    pub fn new(model: &'a ExportResultViewModel) -> Self {
        Self { model }
    }
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Output: {}", self.model.output.display())?;
        writeln!(f, "Cards:  {}", self.model.cards)?;
        writeln!(f, "Size:   {} bytes", self.model.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: usize, first: &str, last: &str, city: &str) -> CardViewModel {
        CardViewModel {
            number,
            name: format!("{} {}", first, last),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            city: city.to_string(),
            state: "Texas".to_string(),
            picture: String::new(),
        }
    }

    fn grid(query: Option<&str>, cards: Vec<CardViewModel>) -> GridViewModel {
        let placeholder = match (query, cards.is_empty()) {
            (Some(_), true) => Some("No result".to_string()),
            _ => None,
        };
        GridViewModel {
            cards,
            total: 3,
            query: query.map(str::to_string),
            placeholder,
        }
    }

    #[test]
    fn test_single_column_grid() {
        let model = grid(
            None,
            vec![card(1, "Alice", "Smith", "Dallas"), card(2, "Bob", "Jones", "Leeds")],
        );

        let output = GridView::new(&model, 1).to_string();

        insta::assert_snapshot!(output, @r"
        Users: 3

        #1 Alice Smith
        alice.smith@example.com
        Dallas, Texas

        #2 Bob Jones
        bob.jones@example.com
        Leeds, Texas
        ");
    }

    #[test]
    fn test_two_column_grid_pads_cells() {
        let model = grid(
            None,
            vec![card(1, "Alice", "Smith", "Dallas"), card(2, "Bob", "Jones", "Leeds")],
        );

        let output = GridView::new(&model, 2).to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[2], format!("{:<34}  #2 Bob Jones", "#1 Alice Smith"));
        assert_eq!(lines[4], format!("{:<34}  Leeds, Texas", "Dallas, Texas"));
    }

    #[test]
    fn test_filtered_grid_without_matches_shows_placeholder() {
        let model = grid(Some("zzz"), vec![]);

        let output = GridView::new(&model, 1).to_string();

        insta::assert_snapshot!(output, @r#"
        Users matching "zzz": 0 of 3

        No result
        "#);
    }

    #[test]
    fn test_compact_grid() {
        let model = grid(Some("an"), vec![card(3, "Ann", "Lee", "Portland")]);

        let output = CompactGridView::new(&model).to_string();

        assert_eq!(
            output,
            format!(
                "#3   {:<24}  {:<36}  Portland, Texas\n",
                "Ann Lee", "ann.lee@example.com"
            )
        );
    }

    #[test]
    fn test_detail_view() {
        let model = DetailViewModel {
            number: 2,
            name: "Bob Jones".to_string(),
            email: "bob.jones@example.com".to_string(),
            picture: "https://randomuser.me/api/portraits/men/2.jpg".to_string(),
            city: "Leeds".to_string(),
            phone: "0113 496 0000".to_string(),
            address: "4, Park Row, Leeds, West Yorkshire LS1 4AP".to_string(),
            dob: "1985-03-14T08:00:00.000Z".to_string(),
            birthday: "03/14/1985".to_string(),
            position: 2,
            of: 3,
            prev_number: 1,
            next_number: 3,
        };

        let output = DetailView::new(&model).to_string();

        insta::assert_snapshot!(output, @r"
        #2 Bob Jones (2 of 3)
          bob.jones@example.com
          Leeds
          --------------------------------
          0113 496 0000
          4, Park Row, Leeds, West Yorkshire LS1 4AP
          Birthday: 03/14/1985
          Picture: https://randomuser.me/api/portraits/men/2.jpg

        Prev: #1  Next: #3
        ");
    }
}
