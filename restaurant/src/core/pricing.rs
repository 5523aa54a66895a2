//! Price summaries shown on the welcome and order screens

use shared::{Course, MenuItem, Price, round_to_cents};

/// Average dish price for one course
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseAverage {
    pub course: Course,
    pub average: f64,
    pub dishes: usize,
}

/// Average price per course in display order; a course with no dishes
/// averages to zero
pub fn course_averages(menu: &[MenuItem]) -> Vec<CourseAverage> {
    Course::ALL
        .iter()
        .map(|&course| {
            let (total, dishes) = menu
                .iter()
                .filter(|item| item.course == course)
                .fold((0.0, 0usize), |(sum, count), item| (sum + item.price.amount(), count + 1));
            let average = if dishes > 0 { total / dishes as f64 } else { 0.0 };
            CourseAverage { course, average, dishes }
        })
        .collect()
}

pub fn order_total(order: &[MenuItem]) -> Price {
    order.iter().map(|item| item.price).sum()
}

/// Format an amount with at most two decimals, e.g. `R106.67`, `R85`
pub fn format_amount(amount: f64) -> String {
    format!("R{}", round_to_cents(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CatalogId;

    #[test]
    fn test_course_averages_for_first_catalog() {
        let averages = course_averages(&CatalogId::One.items());
        let by_course: Vec<(Course, String)> = averages
            .iter()
            .map(|a| (a.course, format_amount(a.average)))
            .collect();

        assert_eq!(
            by_course,
            vec![
                (Course::Starter, "R106.67".to_string()),
                (Course::Main, "R163.33".to_string()),
                (Course::Dessert, "R85".to_string()),
                (Course::Drink, "R42.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_course_averages_to_zero() {
        let menu: Vec<MenuItem> = CatalogId::Two
            .items()
            .into_iter()
            .filter(|item| item.course != Course::Dessert)
            .collect();
        let dessert = course_averages(&menu)[2];
        assert_eq!(dessert.course, Course::Dessert);
        assert_eq!(dessert.dishes, 0);
        assert_eq!(dessert.average, 0.0);
    }

    #[test]
    fn test_order_total() {
        let menu = CatalogId::One.items();
        let order = vec![menu[3].clone(), menu[6].clone()];
        assert_eq!(order_total(&order).amount(), 260.0);
        assert_eq!(order_total(&[]), Price::ZERO);
    }
}
