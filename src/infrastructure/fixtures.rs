//! Seed roster and registration defaults.

use crate::domain::money::Money;
use crate::domain::student::{FeeBreakdown, NewStudent, Student};
use rust_decimal_macros::dec;

pub const DEFAULT_COURSE: &str = "BE Computer Science Engineering";
pub const DEFAULT_YEAR: u8 = 3;
pub const DEFAULT_SEMESTER: u8 = 5;
const SEED_PASSWORD: &str = "sec@2025";

fn breakdown(tuition: Money, hostel: Money) -> FeeBreakdown {
    FeeBreakdown {
        tuition,
        hostel,
        library: Money::new(dec!(2000)),
        lab: Money::new(dec!(3000)),
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    total: Money,
    paid: Money,
    tuition: Money,
    hostel: Money,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        password: SEED_PASSWORD.to_string(),
        course: DEFAULT_COURSE.to_string(),
        year: DEFAULT_YEAR,
        semester: DEFAULT_SEMESTER,
        total_fees: total,
        paid_amount: paid,
        fee_breakdown: breakdown(tuition, hostel),
    }
}

/// The ten students the desk starts with.
#[rustfmt::skip]
pub fn seed_students() -> Vec<Student> {
    let m = Money::new;
    vec![
        seed("23UCS001", "G.Akash", "g.akash@example.com", "9876543210", m(dec!(55000)), m(dec!(0)), m(dec!(40000)), m(dec!(10000))),
        seed("23UCS002", "P.Dharshan", "p.dharshan@example.com", "9876543211", m(dec!(52000)), m(dec!(20000)), m(dec!(38000)), m(dec!(9000))),
        seed("23UCS003", "P.Dinesh", "p.dinesh@example.com", "9876543212", m(dec!(48000)), m(dec!(48000)), m(dec!(35000)), m(dec!(8000))),
        seed("23UCS004", "S.Hariharan", "s.hariharan@example.com", "9876543213", m(dec!(49500)), m(dec!(10000)), m(dec!(36500)), m(dec!(8000))),
        seed("23UCS005", "E.Kaviyarasu", "e.kaviyarasu@example.com", "9876543214", m(dec!(55500)), m(dec!(0)), m(dec!(41000)), m(dec!(9500))),
        seed("23UCS006", "M.Mukunthan", "m.mukunthan@example.com", "9876543215", m(dec!(50500)), m(dec!(50500)), m(dec!(37500)), m(dec!(8000))),
        seed("23UCS007", "S.Navaprashanth", "s.navaprashanth@example.com", "9876543216", m(dec!(49000)), m(dec!(0)), m(dec!(36000)), m(dec!(8000))),
        seed("23UCS008", "P.Vignesh", "p.vignesh@example.com", "9876543217", m(dec!(52500)), m(dec!(25000)), m(dec!(39000)), m(dec!(8500))),
        seed("23UCS009", "M.Thulasi Dass", "m.thulasidass@example.com", "9876543218", m(dec!(50000)), m(dec!(50000)), m(dec!(37000)), m(dec!(8000))),
        seed("23UCS010", "Ramachandhiran", "ramachandhiran@example.com", "9876543219", m(dec!(49800)), m(dec!(0)), m(dec!(36800)), m(dec!(8000))),
    ]
}

/// Builds the roster entry for a newly registered student.
pub fn registered_student(data: NewStudent) -> Student {
    Student {
        id: data.id,
        name: data.name,
        email: data.email,
        phone: data.phone,
        password: data.password,
        course: DEFAULT_COURSE.to_string(),
        year: DEFAULT_YEAR,
        semester: DEFAULT_SEMESTER,
        total_fees: Money::new(dec!(51000)),
        paid_amount: Money::ZERO,
        fee_breakdown: FeeBreakdown {
            tuition: Money::new(dec!(38000)),
            hostel: Money::new(dec!(8000)),
            library: Money::new(dec!(2000)),
            lab: Money::new(dec!(3000)),
        },
    }
}
