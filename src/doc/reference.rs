/*!
# Word Reference

Stack effects are written *before* `→` *after*, with the top of the
stack on the right.

## Literals

| Form | Pushes |
|---|---|
| `42` | Integer |
| `4.5` `5.` `.5` | Float |
| `"text"` | String. `\"` and `\\` escape inside the quotes |

A word that is none of these and not listed below is a
`MALFORMED TOKEN`. Negative numbers are written `0 5 -`.

## Stack

| Word | Effect |
|---|---|
| `dup` | `a → a a` |
| `drop` | `a →` |
| `over` | `a b → a b a` |
| `swap` | `a b → b a` |

## Arithmetic

| Word | Effect |
|---|---|
| `+` | `a b → a+b`. Also joins two strings or two lists |
| `-` | `a b → a-b` |
| `*` | `a b → a*b`. A string or list times an integer repeats it |
| `/` | `a b → a/b`, always a float |
| `^` | `a b → a` to the power `b` |

Integer results that do not fit in 64 bits are an `OVERFLOW`.

## Comparison

| Word | Effect |
|---|---|
| `=` | `a b → 1` if equal, else `0`. Never fails |
| `<` `>` | `a b → 1` or `0`. Both must be numbers, strings or lists |
| `!` | `c → 0` when `c` equals `1`, else `1`. Not at the start of a line, where `!` begins a directive |

## Control

| Word | Effect |
|---|---|
| `if` | `c →`, skip to `else`/`end` when `c` is `0` |
| `else` | jump past the matching `end` |
| `end` | closes an `if` |
| `while` | marks the loop condition |
| `do` | `c →`, leave the loop when `c` is `0` |
| `whileend` | jump back to `while` |
| `break` | leave the innermost loop |
| `continue` | jump back to `while` |

A block that does not balance is an `UNBALANCED BLOCK` and nothing on the
line runs.

## Sequences and variables

| Word | Effect |
|---|---|
| `idx` | `s i → s[i]`. Negative `i` counts from the end |
| `setidx` | `s i v → s` with element `i` replaced by `v` |
| `set` | `v name →` |
| `get` | `name → v` |

## Output

| Word | Effect |
|---|---|
| `.` | `a →`, prints `+ a` |
| `???` | prints the whole stack between two `DEBUG` lines |

## Errors

| Message | Cause |
|---|---|
| `UNTERMINATED STRING` | a line ends inside quotes |
| `UNKNOWN DIRECTIVE` | a `!` line that is not `!alias` or `!unalias` |
| `MALFORMED TOKEN` | a word that is not a literal or a known word |
| `UNBALANCED BLOCK` | `if`/`end` or `while`/`whileend` do not pair up |
| `UNDEFINED ALIAS` | `!unalias` of a name that was never aliased |
| `STACK UNDERFLOW` | a word needs more values than the stack holds |
| `TYPE MISMATCH` | operands of the wrong kind |
| `UNBOUND NAME` | `get` of a name never `set` |
| `OVERFLOW` | integer arithmetic out of range |
| `DIVISION BY ZERO` | `/` by zero |
| `SUBSCRIPT OUT OF RANGE` | `idx` or `setidx` past the end |
| `OUT OF MEMORY` | the stack or a repeated sequence grew too large |
| `BREAK` | CTRL-C stopped the program |

Errors from a running program leave behind whatever the program did
before the failing word.

*/
