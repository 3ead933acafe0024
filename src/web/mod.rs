//! Page assets compiled into the binary.

/// The upload page. The whole body doubles as the upload control: it is
/// painted with the current background image and any click on it goes
/// through the trigger script below. The hidden file input and the form
/// must keep the `file_input` / `upload_form` classes the script looks up.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Backdrop</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <main class="backdrop">
        <p class="hint">Click anywhere to choose a new background image.</p>
    </main>
    <form class="upload_form" action="/upload_bg" method="post" enctype="multipart/form-data">
        <input class="file_input" name="file" type="file" accept="image/jpeg" hidden>
    </form>
    <script src="/main.js"></script>
</body>
</html>
"#;

/// Upload trigger script. Binds once on DOM ready: a document-wide click
/// listener opens the file picker, and the input's change event submits the
/// form. The click scope is deliberately the whole document, not a button.
pub const BINDER_JS: &str = r#"document.addEventListener('DOMContentLoaded', () => {
    if (document.documentElement.dataset.uploadBound === 'true') {
        return;
    }
    const fileInput = document.querySelector('.file_input');
    const uploadForm = document.querySelector('.upload_form');
    if (fileInput === null || uploadForm === null) {
        console.warn('backdrop: .file_input or .upload_form not found, upload disabled');
        return;
    }
    document.documentElement.dataset.uploadBound = 'true';
    document.addEventListener('click', (event) => {
        // fileInput.click() dispatches a bubbling click of its own; opening
        // the picker again from it would double-fire on every user click.
        if (event.target === fileInput) {
            return;
        }
        fileInput.click();
    });
    fileInput.addEventListener('change', () => {
        uploadForm.submit();
    });
});
"#;

pub const STYLESHEET_CSS: &str = r#"html, body {
    height: 100%;
    margin: 0;
}

body {
    background-image: url('/bg.jpg');
    background-size: cover;
    background-position: center;
    font-family: sans-serif;
    cursor: pointer;
}

.backdrop {
    display: flex;
    align-items: flex-end;
    justify-content: center;
    height: 100%;
}

.hint {
    margin: 1.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: rgba(0, 0, 0, 0.55);
    color: #fff;
    user-select: none;
}
"#;

pub const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Not Found</title>
</head>
<body>
    <h1>404 — Page not found</h1>
    <p><a href="/index.html">Back to the upload page</a></p>
</body>
</html>
"#;
