//! The built-in demonstration page: a language picker, a book list that
//! grabs focus and must be answered, and a pre-checked film radio group.

use crate::controls::{
    InputFactory, LabelValueList, RadioGroupFactory, RadioInputFactory, SelectDefaults,
    SelectFactory,
};
use crate::decorator::AttributeDecorator;
use crate::driver::{FormGenerator, RenderDriver};
use crate::envelope::FormEnvelope;
use crate::error::FormResult;
use crate::factory::ControlFactoryExt;
use crate::params::{Params, SelectOption};

const BOOKS: [&str; 7] = [
    "Sorcerer's stone",
    "Chamber of secrets",
    "Prisoner of Azkaban",
    "Goblet of fire",
    "Order of Phoenix",
    "Half-blood Prince",
    "Deathly hallows",
];

pub struct SamplePage {
    envelope: FormEnvelope,
    languages: SelectFactory,
    language_params: Params,
    books: AttributeDecorator<AttributeDecorator<SelectFactory>>,
    films: RadioGroupFactory<AttributeDecorator<RadioInputFactory>>,
}

impl SamplePage {
    pub fn new() -> Self {
        // Name and options arrive per call; the factory only fixes the shape.
        let languages = SelectFactory::new(SelectDefaults {
            multiple_select: true,
            visible_size: 10,
            multiple_return: true,
            ..Default::default()
        });
        let language_params = Params::new().with("name", "languages").with(
            "options",
            ["Python", "Go", "PHP"]
                .iter()
                .map(|lang| SelectOption::new(*lang, *lang))
                .collect::<Vec<_>>(),
        );

        let books = SelectFactory::new(SelectDefaults {
            multiple_select: true,
            visible_size: 7,
            multiple_return: true,
            name: "harrypotter".to_string(),
            options: BOOKS
                .iter()
                .enumerate()
                .map(|(i, title)| SelectOption::new((i + 1).to_string(), *title))
                .collect(),
        })
        .autofocus()
        .required();

        let film = RadioInputFactory::with_default_value(InputFactory::new("starwars")).checked();
        let films = RadioGroupFactory::new(
            film,
            LabelValueList::new()
                .with("The Force Awakens", "7")
                .with("The Last Jedi", "8")
                .with("The Rise of Skywalker", "9"),
        );

        Self {
            envelope: FormEnvelope::get("work_test.php"),
            languages,
            language_params,
            books,
            films,
        }
    }
}

impl Default for SamplePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGenerator for SamplePage {
    fn generate(&self, driver: &mut RenderDriver) -> FormResult<()> {
        driver.form_begin(&self.envelope, None, None)?;
        driver.line_breaks()?;
        driver.control(&self.languages, &self.language_params)?;
        driver.line_breaks()?;
        driver.control(&self.books, &Params::new())?;
        driver.line_breaks()?;
        driver.control(&self.films, &Params::new())?;
        driver.line_breaks()?;
        driver.submit()?;
        driver.form_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_layout() {
        let page = SamplePage::new().render().unwrap();

        assert!(page.starts_with("<form action='work_test.php' method='GET'>\n"));
        assert!(page.ends_with("<input type=submit><br>\n</form>"));
        assert!(page.contains("<select multiple size=\"10\" name=\"languages[]\">"));
        assert!(page.contains("<select multiple size=\"7\" name=\"harrypotter[]\" autofocus  required >"));
        assert!(page.contains("\t<option value=\"1\">Sorcerer's stone</option>"));
        assert!(page.contains("\t<option value=\"7\">Deathly hallows</option>"));
        assert_eq!(page.matches("type=radio").count(), 3);
        assert_eq!(page.matches("checked").count(), 3);
    }
}
