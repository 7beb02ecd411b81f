use rand::Rng;

use crate::domain::dice::{dice_from_faces, DiceError, Die};
use crate::engine::RandomSource;

/// Честные кости на системном RNG.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn roll_die(&mut self) -> Die {
        Die::ALL[rand::thread_rng().gen_range(0..Die::ALL.len())]
    }
}

/// Детерминированный RNG для тестов, реплея и стресс-прогонов.
/// Одинаковый seed – одинаковая последовательность бросков.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn roll_die(&mut self) -> Die {
        Die::ALL[self.inner.gen_range(0..Die::ALL.len())]
    }
}

/// Заранее заданные кости: отдаёт грани по кругу.
///
/// Нужен для сценариев "бросок [1,1,1,5,5,2], потом [2]" в тестах
/// и для воспроизведения партии по записанным броскам.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<Die>,
    cursor: usize,
}

impl ScriptedDice {
    /// Скрипт из чисел. Пустой скрипт или грань вне 1..=6 – ошибка.
    pub fn from_faces(faces: &[u8]) -> Result<Self, DiceError> {
        let faces = dice_from_faces(faces)?;
        if faces.is_empty() {
            return Err(DiceError::Empty);
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Сколько граней уже выдано.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDice {
    fn roll_die(&mut self) -> Die {
        let die = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        die
    }
}
