/// Built-in sample doctors used when the directory endpoint is unavailable

use super::doctor::{Doctor, DoctorId};

pub fn fallback_doctors() -> Vec<Doctor> {
    vec![
        sample(1, "Dr. Jane Doe", "Gynecologist", 10, 50.0),
        sample(2, "Dr. Sarah Johnson", "Obstetrician", 8, 40.0),
        sample(3, "Dr. Emily Clark", "Fertility Specialist", 12, 60.0),
    ]
}

fn sample(id: u32, name: &str, title: &str, experience_years: u32, fee: f64) -> Doctor {
    Doctor {
        id: DoctorId(id),
        name: name.to_string(),
        title: title.to_string(),
        experience_years,
        fee,
        currency: "USD".to_string(),
        image: format!("assets/img/doctor{}.jpg", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_set() {
        let doctors = fallback_doctors();
        let ids: Vec<u32> = doctors.iter().map(|d| d.id.0).collect();
        let fees: Vec<f64> = doctors.iter().map(|d| d.fee).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(fees, vec![50.0, 40.0, 60.0]);
        assert!(doctors.iter().all(|d| d.currency == "USD"));
        assert_eq!(doctors[1].name, "Dr. Sarah Johnson");
    }
}
