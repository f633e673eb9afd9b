#![allow(dead_code)]

use descifrador::key::Key;
use descifrador::text::{normalize, only_letters};

/// A few paragraphs of ordinary Spanish prose, well over a thousand letters.
pub const SPANISH_SAMPLE: &str = "\
En un pequeño pueblo de la sierra vivía una mujer que se llamaba Carmen. \
Todas las mañanas, cuando el sol apenas asomaba por encima de los montes, \
salía de su casa con una cesta de mimbre y bajaba por el camino del río hasta \
el mercado. Allí compraba pan, queso y algunas frutas para la semana, y \
hablaba un rato con las vecinas sobre las cosas del pueblo. Nadie sabía muy \
bien de dónde había venido, pero todos la querían porque era amable con los \
niños y siempre tenía una palabra buena para quien la necesitaba.

Un día de otoño llegó al pueblo un viajero cansado. Llevaba un abrigo viejo, \
una maleta de cuero y un libro bajo el brazo. Preguntó por una posada donde \
pasar la noche, pero la única que había estaba cerrada desde hacía años. \
Carmen lo vio sentado en la plaza, con la mirada perdida, y se acercó a \
preguntarle si necesitaba algo. El hombre le contó que venía de muy lejos, \
que había recorrido medio país buscando a su hermano, y que alguien le había \
dicho que tal vez lo encontraría en este lugar.

Ella lo invitó a cenar a su casa. Mientras comían una sopa caliente, el \
viajero habló de las ciudades que había conocido, de los mares que había \
cruzado y de las personas que lo habían ayudado por el camino. Carmen lo \
escuchaba con atención, porque también ella había dejado atrás una vida \
entera antes de llegar a la sierra. Cuando el hombre dijo el nombre de su \
hermano, la mujer se quedó callada durante un largo momento. Después se \
levantó, fue hasta un viejo armario y sacó una carta amarilla por el paso \
del tiempo.

La carta estaba firmada por el mismo nombre. El hermano del viajero había \
vivido en el pueblo muchos años atrás y había sido el mejor amigo de Carmen. \
Se había marchado una mañana de invierno sin decir a nadie hacia dónde iba, \
y desde entonces nadie había vuelto a saber nada de él. En la carta pedía \
perdón por irse sin despedirse y prometía volver algún día para contar toda \
la verdad. El viajero leyó la carta varias veces, en silencio, y luego la \
guardó con cuidado dentro de su libro.

Al día siguiente los dos salieron juntos por el camino del norte, el mismo \
que según la carta había tomado el hermano. Los vecinos los vieron alejarse \
y durante mucho tiempo se preguntaron qué habría sido de ellos. Algunos \
decían que habían encontrado al hermano en una ciudad de la costa; otros, \
que seguían buscando todavía. Lo cierto es que, cada primavera, llega al \
pueblo una carta sin remitente que solo dice que todos están bien y que \
pronto volverán a casa.
";

/// Fixed encryption key used by the end-to-end tests.
pub const ENCRYPTION_IMAGES: &str = "qwertyuiopasdfghjklñzxcvbnm";

pub fn encryption_key() -> Key {
    Key::from_images(ENCRYPTION_IMAGES).expect("fixture key is a permutation")
}

/// Normalized sample and its encryption under [`encryption_key`].
pub fn sample_pair() -> (String, String) {
    let plain = normalize(SPANISH_SAMPLE);
    let cipher = encryption_key().apply(&plain);
    (plain, cipher)
}

/// Share of letter positions where the two texts agree.
pub fn letter_agreement(expected: &str, actual: &str) -> f64 {
    let a = only_letters(expected);
    let b = only_letters(actual);
    let total = a.chars().count();
    if total == 0 {
        return 0.0;
    }
    let same = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    same as f64 / total as f64
}
