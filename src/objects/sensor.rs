use serde::{Deserialize, Serialize};

/// Hourly reading shown on the factory monitor page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorReading {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
    pub people: f64,
}

/// Half-hourly reading shown on the realtime page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensor {
    Temperature,
    Humidity,
    Pressure,
}

impl Sensor {
    pub const ALL: [Sensor; 3] = [Sensor::Temperature, Sensor::Humidity, Sensor::Pressure];

    pub fn label(&self) -> &'static str {
        match self {
            Sensor::Temperature => "Temperature",
            Sensor::Humidity => "Humidity",
            Sensor::Pressure => "Pressure",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Sensor::Temperature => "#ff4d4f",
            Sensor::Humidity => "#1890ff",
            Sensor::Pressure => "#52c41a",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Sensor::Temperature => "°C",
            Sensor::Humidity => "%",
            Sensor::Pressure => "hPa",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sensor::Temperature => "local_fire_department",
            Sensor::Humidity => "cloud",
            Sensor::Pressure => "science",
        }
    }

    /// Latest value displayed on the sensor card.
    pub fn current_value(&self) -> f64 {
        match self {
            Sensor::Temperature => 26.4,
            Sensor::Humidity => 47.2,
            Sensor::Pressure => 1012.4,
        }
    }

    pub fn value_of(&self, reading: &SensorReading) -> f64 {
        match self {
            Sensor::Temperature => reading.temperature,
            Sensor::Humidity => reading.humidity,
            Sensor::Pressure => reading.pressure,
        }
    }

    pub fn series(&self, readings: &[SensorReading]) -> Vec<f64> {
        readings.iter().map(|r| self.value_of(r)).collect()
    }
}

pub fn mock_monitor_readings() -> Vec<MonitorReading> {
    [
        (25.0, 45.0, 10.0),
        (24.0, 46.0, 8.0),
        (24.0, 47.0, 5.0),
        (23.0, 48.0, 3.0),
        (23.0, 48.0, 2.0),
        (24.0, 47.0, 3.0),
        (25.0, 46.0, 5.0),
        (26.0, 45.0, 15.0),
        (27.0, 44.0, 30.0),
        (28.0, 43.0, 45.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(hour, (temperature, humidity, people))| MonitorReading {
        time: format!("{:02}:00", hour),
        temperature,
        humidity,
        people,
    })
    .collect()
}

pub fn mock_sensor_readings() -> Vec<SensorReading> {
    [
        (25.2, 45.8, 1013.2),
        (25.5, 46.1, 1013.0),
        (25.8, 46.5, 1012.8),
        (26.1, 46.8, 1012.6),
        (26.4, 47.2, 1012.4),
        (26.7, 47.5, 1012.2),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (temperature, humidity, pressure))| SensorReading {
        time: format!("{:02}:{:02}", i / 2, (i % 2) * 30),
        temperature,
        humidity,
        pressure,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_readings_are_half_hourly() {
        let times: Vec<String> = mock_sensor_readings().into_iter().map(|r| r.time).collect();

        assert_eq!(times, vec!["00:00", "00:30", "01:00", "01:30", "02:00", "02:30"]);
    }

    #[test]
    fn monitor_readings_cover_ten_hours() {
        let readings = mock_monitor_readings();

        assert_eq!(readings.len(), 10);
        assert_eq!(readings[9].time, "09:00");
        assert_eq!(readings[9].people, 45.0);
    }

    #[test]
    fn pressure_series_falls() {
        let series = Sensor::Pressure.series(&mock_sensor_readings());

        assert_eq!(series.first(), Some(&1013.2));
        assert_eq!(series.last(), Some(&1012.2));
        assert_eq!(Sensor::Pressure.unit(), "hPa");
    }
}
