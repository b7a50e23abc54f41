//! Booking request form.
//!
//! State machine: idle -> submitting -> success (reset) or error (fields
//! kept so the user can retry without re-entering anything). Validation is
//! local; nothing reaches the network until every required field is filled.

use crate::input::Input;
use chrono::NaiveDate;
use propout_core::BookingRequest;

pub const GUEST_OPTIONS: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    FullName,
    Email,
    Phone,
    Apartment,
    CheckIn,
    CheckOut,
    Guests,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::FullName => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Apartment,
            Self::Apartment => Self::CheckIn,
            Self::CheckIn => Self::CheckOut,
            Self::CheckOut => Self::Guests,
            Self::Guests => Self::Message,
            Self::Message => Self::FullName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::FullName => Self::Message,
            Self::Email => Self::FullName,
            Self::Phone => Self::Email,
            Self::Apartment => Self::Phone,
            Self::CheckIn => Self::Apartment,
            Self::CheckOut => Self::CheckIn,
            Self::Guests => Self::CheckOut,
            Self::Message => Self::Guests,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Apartment => "Preferred Apartment",
            Self::CheckIn => "Check-in Date",
            Self::CheckOut => "Check-out Date",
            Self::Guests => "Number of Guests",
            Self::Message => "Additional Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

/// A property the user can pick as the booking target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApartmentOption {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub full_name: Input,
    pub email: Input,
    pub phone: Input,
    /// Selected property id; empty until the user picks one or the dialog
    /// pre-selects the property it was opened for.
    pub apartment_id: String,
    pub apartment_title: String,
    pub check_in: Input,
    pub check_out: Input,
    /// Selected guest count as entered, one of [`GUEST_OPTIONS`] or empty.
    pub guests: String,
    pub message: Input,
    pub focus: FormField,
    pub submitting: bool,
    options: Vec<ApartmentOption>,
}

impl BookingForm {
    /// Replace the pickable apartments. The current selection survives even
    /// if it is not in the new list (it may have been pre-selected from a
    /// detail page whose record fell out of the filtered catalog).
    pub fn set_options(&mut self, options: Vec<ApartmentOption>) {
        self.options = options;
    }

    pub fn options(&self) -> &[ApartmentOption] {
        &self.options
    }

    pub fn select_apartment(&mut self, id: &str, title: &str) {
        self.apartment_id = id.to_string();
        self.apartment_title = title.to_string();
    }

    /// Step through the loaded apartments with Left/Right.
    pub fn cycle_apartment(&mut self, step: isize) {
        if self.options.is_empty() {
            return;
        }
        let current = self
            .options
            .iter()
            .position(|option| option.id == self.apartment_id);
        let next = match current {
            Some(index) => {
                (index as isize + step).rem_euclid(self.options.len() as isize) as usize
            }
            None if step < 0 => self.options.len() - 1,
            None => 0,
        };
        let option = self.options[next].clone();
        self.select_apartment(&option.id, &option.title);
    }

    pub fn cycle_guests(&mut self, step: isize) {
        let current = GUEST_OPTIONS.iter().position(|g| *g == self.guests);
        let next = match current {
            Some(index) => {
                (index as isize + step).rem_euclid(GUEST_OPTIONS.len() as isize) as usize
            }
            None if step < 0 => GUEST_OPTIONS.len() - 1,
            None => 0,
        };
        self.guests = GUEST_OPTIONS[next].to_string();
    }

    pub fn set_guests_digit(&mut self, c: char) {
        let digit = c.to_string();
        if GUEST_OPTIONS.contains(&digit.as_str()) {
            self.guests = digit;
        }
    }

    /// The text input under focus, if the focused field is free text.
    pub fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            FormField::FullName => Some(&mut self.full_name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::CheckIn => Some(&mut self.check_in),
            FormField::CheckOut => Some(&mut self.check_out),
            FormField::Message => Some(&mut self.message),
            FormField::Apartment | FormField::Guests => None,
        }
    }

    pub fn missing_required(&self) -> bool {
        self.full_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.apartment_id.is_empty()
            || self.check_in.is_empty()
            || self.check_out.is_empty()
            || self.guests.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.missing_required() {
            return Err("Please fill in all required fields.".to_string());
        }
        let check_in = parse_date(self.check_in.value())?;
        let check_out = parse_date(self.check_out.value())?;
        if check_out <= check_in {
            return Err("Check-out date must be after check-in date.".to_string());
        }
        Ok(())
    }

    /// Validate and build the wire payload. The guest selection is parsed to
    /// an integer here; everything else goes out as entered.
    pub fn to_request(&self) -> Result<BookingRequest, String> {
        self.validate()?;
        let number_of_guests = self
            .guests
            .parse::<u32>()
            .map_err(|_| "Select the number of guests.".to_string())?;
        let additional_message = match self.message.value() {
            "" => None,
            text => Some(text.to_string()),
        };
        Ok(BookingRequest {
            full_name: self.full_name.value().to_string(),
            email: self.email.value().to_string(),
            phone_number: self.phone.value().to_string(),
            preferred_apartment: Some(self.apartment_id.clone()),
            check_in_date: self.check_in.value().to_string(),
            check_out_date: self.check_out.value().to_string(),
            number_of_guests,
            additional_message,
        })
    }

    /// Clear every field back to empty. The apartment options stay; they
    /// belong to the catalog, not to one submission.
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.apartment_id.clear();
        self.apartment_title.clear();
        self.check_in.clear();
        self.check_out.clear();
        self.guests.clear();
        self.message.clear();
        self.focus = FormField::default();
        self.submitting = false;
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| "Enter dates as YYYY-MM-DD.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::default();
        form.full_name.set("Ada Obi");
        form.email.set("ada@example.com");
        form.phone.set("+234 907 474 3062");
        form.select_apartment("65fa12", "Executive 2-Bedroom");
        form.check_in.set("2026-02-14");
        form.check_out.set("2026-02-16");
        form.guests = "3".to_string();
        form
    }

    #[test]
    fn test_empty_required_field_fails_validation() {
        let clears: [fn(&mut BookingForm); 7] = [
            |f| f.full_name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.apartment_id.clear(),
            |f| f.check_in.clear(),
            |f| f.check_out.clear(),
            |f| f.guests.clear(),
        ];
        for clear in clears {
            let mut form = filled_form();
            clear(&mut form);
            assert_eq!(
                form.validate().unwrap_err(),
                "Please fill in all required fields."
            );
        }
    }

    #[test]
    fn test_message_is_optional() {
        let form = filled_form();
        assert!(form.message.is_empty());
        assert!(form.validate().is_ok());
        assert_eq!(form.to_request().unwrap().additional_message, None);
    }

    #[test]
    fn test_guest_selection_parses_to_integer() {
        let request = filled_form().to_request().unwrap();
        assert_eq!(request.number_of_guests, 3);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["numberOfGuests"], serde_json::json!(3));
    }

    #[test]
    fn test_date_order_is_checked() {
        let mut form = filled_form();
        form.check_out.set("2026-02-14");
        assert_eq!(
            form.validate().unwrap_err(),
            "Check-out date must be after check-in date."
        );

        form.check_out.set("14/02/2026");
        assert_eq!(form.validate().unwrap_err(), "Enter dates as YYYY-MM-DD.");
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut form = filled_form();
        form.message.set("Late arrival");
        form.submitting = true;
        form.set_options(vec![ApartmentOption {
            id: "65fa12".to_string(),
            title: "Executive 2-Bedroom".to_string(),
        }]);
        form.reset();
        assert!(form.full_name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.apartment_id.is_empty());
        assert!(form.check_in.is_empty());
        assert!(form.check_out.is_empty());
        assert!(form.guests.is_empty());
        assert!(form.message.is_empty());
        assert!(!form.submitting);
        // Catalog options are not form data.
        assert_eq!(form.options().len(), 1);
    }

    #[test]
    fn test_apartment_cycle_wraps() {
        let mut form = BookingForm::default();
        form.set_options(vec![
            ApartmentOption {
                id: "a".to_string(),
                title: "Studio".to_string(),
            },
            ApartmentOption {
                id: "b".to_string(),
                title: "Penthouse".to_string(),
            },
        ]);
        form.cycle_apartment(1);
        assert_eq!(form.apartment_id, "a");
        form.cycle_apartment(1);
        assert_eq!(form.apartment_id, "b");
        form.cycle_apartment(1);
        assert_eq!(form.apartment_id, "a");
        form.cycle_apartment(-1);
        assert_eq!(form.apartment_id, "b");
    }

    #[test]
    fn test_guest_cycle_and_digits() {
        let mut form = BookingForm::default();
        form.cycle_guests(-1);
        assert_eq!(form.guests, "6");
        form.cycle_guests(1);
        assert_eq!(form.guests, "1");
        form.set_guests_digit('4');
        assert_eq!(form.guests, "4");
        form.set_guests_digit('9');
        assert_eq!(form.guests, "4");
    }
}
